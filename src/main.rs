use bibtex_names::{FormatOptions, NameList, Style};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};
use std::process;
use std::sync::Arc;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and format the author and editor fields of BibTeX entries.
///
/// Pass a field as arguments (they are joined with spaces), or `-` to read
/// one field per line from stdin.
#[derive(Parser, Debug)]
#[command(name = "bibtex_names")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the parsed names as JSON
    Parse {
        #[command(flatten)]
        input: Input,
    },
    /// Print the names rendered in a citation style
    Format {
        #[arg(short, long, value_enum, default_value_t = StyleArg::LastFirst)]
        style: StyleArg,

        /// Abbreviate given names to initials
        #[arg(short, long)]
        abbreviate: bool,

        /// Put a comma before the final "and" of three or more names
        #[arg(long)]
        oxford_comma: bool,

        #[command(flatten)]
        input: Input,
    },
}

#[derive(Args, Debug)]
struct Input {
    /// Convert LaTeX markup to Unicode first
    #[arg(short, long)]
    latex_free: bool,

    #[arg(required = true, value_name = "NAMES")]
    names: Vec<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StyleArg {
    Natbib,
    LastNames,
    LastFirst,
    LastFirstWithAnd,
    FirstLast,
    FirstLastWithAnd,
    Alphabetization,
    LastFirstFirstLast,
}

impl From<StyleArg> for Style {
    fn from(arg: StyleArg) -> Style {
        match arg {
            StyleArg::Natbib => Style::Natbib,
            StyleArg::LastNames => Style::LastNames,
            StyleArg::LastFirst => Style::LastFirst,
            StyleArg::LastFirstWithAnd => Style::LastFirstWithAnd,
            StyleArg::FirstLast => Style::FirstLast,
            StyleArg::FirstLastWithAnd => Style::FirstLastWithAnd,
            StyleArg::Alphabetization => Style::Alphabetization,
            StyleArg::LastFirstFirstLast => Style::LastFirstFirstLast,
        }
    }
}

impl Input {
    fn parse(&self, text: &str) -> Arc<NameList> {
        let list = NameList::parse(text);
        debug!(names = list.len(), "parsed name list");
        if self.latex_free {
            list.latex_free()
        } else {
            list
        }
    }

    fn from_stdin(&self) -> bool {
        self.names.len() == 1 && self.names[0] == "-"
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bibtex_names=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Parse { input } => run(input, |list| {
            serde_json::to_string(&**list).map_err(io::Error::from)
        }),
        Command::Format {
            style,
            abbreviate,
            oxford_comma,
            input,
        } => {
            let options = FormatOptions {
                abbreviate: *abbreviate,
                oxford_comma: *oxford_comma,
            };
            let style = Style::from(*style);
            run(input, |list| Ok(list.render(style, options)))
        }
    };

    if let Err(e) = result {
        if e.kind() != io::ErrorKind::BrokenPipe {
            error!("{}", e);
            process::exit(1);
        }
    }
}

fn run<F>(input: &Input, output: F) -> io::Result<()>
where
    F: Fn(&Arc<NameList>) -> io::Result<String>,
{
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    if input.from_stdin() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            writeln!(stdout, "{}", output(&input.parse(&line))?)?;
        }
    } else {
        let text = input.names.join(" ");
        writeln!(stdout, "{}", output(&input.parse(&text))?)?;
    }

    stdout.flush()
}
