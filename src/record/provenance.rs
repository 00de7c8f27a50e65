use super::Record;

/// Fields that describe where a record came from rather than what it says.
///
/// A duplicate never inherits these; they are reset to absent and the owning
/// collection fills them in again on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProvenanceField {
    Creation,
    CreatedBy,
    LastUpdate,
    Ref,
    Slug,
}

impl ProvenanceField {
    pub const ALL: [Self; 5] = [
        Self::Creation,
        Self::CreatedBy,
        Self::LastUpdate,
        Self::Ref,
        Self::Slug,
    ];

    /// Serialized field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Creation => "creation",
            Self::CreatedBy => "createdBy",
            Self::LastUpdate => "lastupdate",
            Self::Ref => "ref",
            Self::Slug => "slug",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }

    /// Clear the field, including any copy stored under the same name among
    /// the content fields.
    pub fn reset(self, record: &mut Record) {
        match self {
            Self::Creation => record.creation = None,
            Self::CreatedBy => record.created_by = None,
            Self::LastUpdate => record.lastupdate = None,
            Self::Ref => record.reference = None,
            Self::Slug => record.slug = None,
        }
        record.fields.remove(self.as_str());
    }

    #[must_use]
    pub fn is_set(self, record: &Record) -> bool {
        record.fields.contains_key(self.as_str()) || self.is_set_typed(record)
    }

    fn is_set_typed(self, record: &Record) -> bool {
        match self {
            Self::Creation => record.creation.is_some(),
            Self::CreatedBy => record.created_by.is_some(),
            Self::LastUpdate => record.lastupdate.is_some(),
            Self::Ref => record.reference.is_some(),
            Self::Slug => record.slug.is_some(),
        }
    }
}
