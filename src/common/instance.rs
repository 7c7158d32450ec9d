use bimap::BiHashMap;

/// The elements that have to be covered, mapped to their 0-indexed position in the input.
#[derive(Debug, Default, Clone)]
pub struct GroundSet {
    elements: BiHashMap<String, usize>,
}

impl GroundSet {
    /// Append an element. Returns false and leaves the set untouched if the element is already
    /// present.
    pub fn push(&mut self, element: &str) -> bool {
        let index = self.elements.len();
        self.elements
            .insert_no_overwrite(element.to_string(), index)
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn index_of(&self, element: &str) -> Option<usize> {
        self.elements.get_by_left(element).copied()
    }

    pub fn element(&self, index: usize) -> Option<&str> {
        self.elements.get_by_right(&index).map(String::as_str)
    }
}

/// A candidate subset, stored as indices into the ground set in input order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Subset {
    pub elements: Vec<usize>,
}

/// For every ground set element the 1-indexed positions of the subsets containing it, in
/// increasing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceIndex {
    lists: Vec<Vec<usize>>,
}

impl OccurrenceIndex {
    pub fn from_lists(lists: Vec<Vec<usize>>) -> Self {
        OccurrenceIndex { lists }
    }

    /// Number of ground set elements.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn of(&self, element: usize) -> &[usize] {
        &self.lists[element]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.lists.iter().map(Vec::as_slice)
    }
}

/// An exact cover instance: the ground set and the family of candidate subsets.
#[derive(Debug, Clone)]
pub struct Instance {
    ground: GroundSet,
    subsets: Vec<Subset>,
}

impl Instance {
    pub fn new(ground: GroundSet, subsets: Vec<Subset>) -> Self {
        Instance { ground, subsets }
    }

    pub fn ground(&self) -> &GroundSet {
        &self.ground
    }

    pub fn subset_count(&self) -> usize {
        self.subsets.len()
    }

    /// The subset owning the 1-indexed variable `position`.
    pub fn subset(&self, position: usize) -> Option<&Subset> {
        position
            .checked_sub(1)
            .and_then(|index| self.subsets.get(index))
    }

    /// The element tokens of the subset at the 1-indexed `position`, in input order.
    pub fn tokens(&self, position: usize) -> Option<Vec<&str>> {
        self.subset(position).map(|subset| {
            subset
                .elements
                .iter()
                .filter_map(|&e| self.ground.element(e))
                .collect()
        })
    }

    /// Invert the subset family into per element occurrence lists.
    pub fn occurrences(&self) -> OccurrenceIndex {
        let mut lists = vec![Vec::new(); self.ground.len()];
        for (index, subset) in self.subsets.iter().enumerate() {
            for &element in &subset.elements {
                lists[element].push(index + 1);
            }
        }
        OccurrenceIndex { lists }
    }
}
