use super::{Name, NameList};
use std::hash::{Hash, Hasher};

/// Names are equal when their given name, prefix, family name and suffix
/// are. The abbreviated given name is derived from the given name and is
/// not compared.
impl Eq for Name {}
impl PartialEq for Name {
    fn eq(&self, other: &Name) -> bool {
        self.given_name == other.given_name
            && self.name_prefix == other.name_prefix
            && self.family_name == other.family_name
            && self.name_suffix == other.name_suffix
    }
}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.given_name.hash(state);
        self.name_prefix.hash(state);
        self.family_name.hash(state);
        self.name_suffix.hash(state);
    }
}

/// Lists are equal when they hold equal names in the same order. Whether
/// either has been normalized, or shares a cache entry, doesn't matter.
impl Eq for NameList {}
impl PartialEq for NameList {
    fn eq(&self, other: &NameList) -> bool {
        self.names() == other.names()
    }
}

impl Hash for NameList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.names().hash(state);
    }
}
