#[macro_use]
extern crate criterion;

mod bench {
    use bibtex_names::{latex_to_unicode, FormatOptions, Name, NameList, ParseCache, Style};
    use std::fs::File;
    use std::io::prelude::*;
    use std::io::BufReader;

    use criterion::{black_box, criterion_group, Criterion};

    fn parse_uncached(c: &mut Criterion, id: &str, text: &str) {
        c.bench_function(id, |b| {
            b.iter(|| {
                let cache = ParseCache::new();
                black_box(cache.parse(black_box(text)).len())
            })
        });
    }

    fn parsing_first_last(c: &mut Criterion) {
        parse_uncached(c, "first last", "John Smith");
    }

    fn parsing_last_first(c: &mut Criterion) {
        parse_uncached(c, "von last, jr, first", "von Neumann, Jr, John");
    }

    fn parsing_many_authors(c: &mut Criterion) {
        parse_uncached(
            c,
            "five authors",
            "John von Neumann and Smith, John and Peter Black Brown and {IEEE} and Mao, Tse-tung",
        );
    }

    fn parsing_latex(c: &mut Criterion) {
        parse_uncached(
            c,
            "latex markup",
            r#"Mu{\d{h}}ammad al-Khw{\={a}}rizm{\={i}} and Corrado B{\"o}hm and Kurt G{\"{o}}del"#,
        );
    }

    fn parsing_cached(c: &mut Criterion) {
        let text = "John von Neumann and Smith, John and Peter Black Brown";
        let _held = NameList::parse(text);
        c.bench_function("cache hit", |b| {
            b.iter(|| black_box(NameList::parse(black_box(text)).len()))
        });
    }

    criterion_group!(
        e2e_parsing,
        parsing_first_last,
        parsing_last_first,
        parsing_many_authors,
        parsing_latex,
        parsing_cached
    );

    fn rendering(c: &mut Criterion) {
        let list = NameList::parse("John von Neumann and Smith, John and Peter Black Brown");
        let options = FormatOptions {
            abbreviate: true,
            oxford_comma: true,
        };
        c.bench_function("render all styles", |b| {
            b.iter(|| {
                for style in Style::ALL {
                    black_box(list.render(style, options));
                }
            })
        });
    }

    fn converting_latex(c: &mut Criterion) {
        let marked_up = r#"{{\L{}}ukasz Micha\l{}} B{\"o}hm"#;
        c.bench_function("latex to unicode", |b| {
            b.iter(|| black_box(latex_to_unicode(black_box(marked_up))))
        });
        c.bench_function("latex to unicode (plain)", |b| {
            b.iter(|| black_box(latex_to_unicode(black_box("Łukasz Michał Böhm"))))
        });
    }

    criterion_group!(e2e_output, rendering, converting_latex);

    fn parsing_fixtures(c: &mut Criterion) {
        let f = File::open("tests/parseable-names.txt").ok().unwrap();
        let reader = BufReader::new(f);
        let inputs: Vec<String> = reader
            .lines()
            .map(|l| l.ok().unwrap())
            .filter(|l| !l.starts_with('#') && l.contains('|'))
            .map(|l| l.split('|').next().unwrap().to_string())
            .collect();

        c.bench_function(&format!("parse {} names", inputs.len()), |b| {
            b.iter(|| {
                let mut parts = 0;
                for input in inputs.iter() {
                    let name = Name::parse(input);
                    parts += name.family_name().map_or(0, str::len);
                }
                black_box(parts)
            })
        });
    }

    criterion_group!(realistic, parsing_fixtures);
}

criterion_main!(bench::realistic, bench::e2e_parsing, bench::e2e_output);
