use crate::constants::SECTION_LABELS;
use fnv::FnvHashMap;

/// Ordered, immutable list of content sections. Each label maps 1:1 to a
/// panel keyed by the lowercased label.
pub struct Sections {
    labels: Vec<String>,
    ids: Vec<String>,
    index_by_id: FnvHashMap<String, usize>,
}

impl Sections {
    pub fn new(labels: &[&str]) -> Self {
        let labels: Vec<String> = labels.iter().map(|l| l.to_string()).collect();
        let ids: Vec<String> = labels.iter().map(|l| l.to_lowercase()).collect();
        let index_by_id = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();
        Self {
            labels,
            ids,
            index_by_id,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Normalized panel id for a section index.
    pub fn id(&self, index: usize) -> Option<&str> {
        self.ids.get(index).map(String::as_str)
    }

    /// Index for a normalized panel id.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }
}

impl Default for Sections {
    fn default() -> Self {
        Self::new(&SECTION_LABELS)
    }
}
