use super::{Name, NameList};
use serde::ser::{Serialize, SerializeStruct, Serializer};

impl Serialize for Name {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let parts = [
            ("given_name", self.given_name()),
            ("given_name_abbreviated", self.given_name_abbreviated()),
            ("name_prefix", self.name_prefix()),
            ("family_name", self.family_name()),
            ("name_suffix", self.name_suffix()),
        ];

        let present = parts.iter().filter(|(_, part)| part.is_some()).count();
        let mut state = serializer.serialize_struct("Name", present + 1)?;
        for (key, part) in parts {
            match part {
                Some(part) => state.serialize_field(key, part)?,
                None => state.skip_field(key)?,
            }
        }
        state.serialize_field("institution", &self.is_institution())?;
        state.end()
    }
}

impl Serialize for NameList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
