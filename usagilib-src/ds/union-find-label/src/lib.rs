use std::{collections::HashMap, fmt, hash::Hash};

use union_find::UnionFind;

/// [`UnionFind`] addressed by arbitrary distinct labels.
///
/// The label set is fixed at construction: the two lookup tables form a
/// bijection between the labels and `0..n`, and every operation
/// translates through them before delegating to the owned [`UnionFind`].
pub struct UnionFindLabel<L> {
    uf: UnionFind,
    index: HashMap<L, usize>,
    label: Vec<L>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UnionFindLabelError<L> {
    DuplicateLabel(L),
    UnknownLabel(L),
}

impl<L: fmt::Debug> fmt::Display for UnionFindLabelError<L> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateLabel(l) => write!(fmt, "duplicate label: {l:?}"),
            Self::UnknownLabel(l) => write!(fmt, "unknown label: {l:?}"),
        }
    }
}

impl<L: fmt::Debug> std::error::Error for UnionFindLabelError<L> {}

impl<L: Hash + Eq + Clone> UnionFindLabel<L> {
    pub fn new(
        labels: impl IntoIterator<Item = L>,
    ) -> Result<Self, UnionFindLabelError<L>> {
        let label: Vec<_> = labels.into_iter().collect();
        let mut index = HashMap::with_capacity(label.len());
        for (i, l) in label.iter().enumerate() {
            if index.insert(l.clone(), i).is_some() {
                return Err(UnionFindLabelError::DuplicateLabel(l.clone()));
            }
        }
        let uf = UnionFind::new(label.len());
        Ok(Self { uf, index, label })
    }
    fn index_of(&self, l: &L) -> Result<usize, UnionFindLabelError<L>> {
        self.index
            .get(l)
            .copied()
            .ok_or_else(|| UnionFindLabelError::UnknownLabel(l.clone()))
    }
    pub fn find_label(&self, l: &L) -> Result<&L, UnionFindLabelError<L>> {
        let root = self.uf.find(self.index_of(l)?).unwrap();
        Ok(&self.label[root])
    }
    pub fn union(
        &mut self,
        x: &L,
        y: &L,
    ) -> Result<bool, UnionFindLabelError<L>> {
        let x = self.index_of(x)?;
        let y = self.index_of(y)?;
        Ok(self.uf.union(x, y).unwrap())
    }
    pub fn same(&self, x: &L, y: &L) -> Result<bool, UnionFindLabelError<L>> {
        let x = self.index_of(x)?;
        let y = self.index_of(y)?;
        Ok(self.uf.same(x, y).unwrap())
    }
    pub fn size(&self, l: &L) -> Result<usize, UnionFindLabelError<L>> {
        Ok(self.uf.size(self.index_of(l)?).unwrap())
    }
    pub fn members(&self, l: &L) -> Result<Vec<&L>, UnionFindLabelError<L>> {
        let members = self.uf.members(self.index_of(l)?).unwrap();
        Ok(members.into_iter().map(|i| &self.label[i]).collect())
    }
    pub fn roots(&self) -> Vec<&L> {
        self.uf.roots().into_iter().map(|i| &self.label[i]).collect()
    }
    pub fn group_count(&self) -> usize { self.uf.group_count() }
    pub fn all_group_members(&self) -> HashMap<&L, Vec<&L>> {
        self.uf
            .all_group_members()
            .into_iter()
            .map(|(root, members)| {
                let members: Vec<_> =
                    members.into_iter().map(|i| &self.label[i]).collect();
                (&self.label[root], members)
            })
            .collect()
    }
    pub fn len(&self) -> usize { self.label.len() }
}

impl<L: fmt::Debug> fmt::Debug for UnionFindLabel<L> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct AsSet<'a, L>(&'a [usize], &'a [L]);
        impl<L: fmt::Debug> fmt::Debug for AsSet<'_, L> {
            fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt.debug_set()
                    .entries(self.0.iter().map(|&i| &self.1[i]))
                    .finish()
            }
        }
        let groups = self.uf.all_group_members();
        fmt.debug_map()
            .entries(groups.iter().map(|(&root, set)| {
                (&self.label[root], AsSet(set, &self.label))
            }))
            .finish()
    }
}
