use std::{cell::RefCell, collections::BTreeMap, fmt, mem};

/// Disjoint sets over `0..n`, with union by size and path compression.
///
/// The slot array packs both roles into one `usize` per node: a value
/// less than `n` is a parent pointer, and a root holds its set size
/// negated with wrapping arithmetic. Sizes lie in `1..=n`, so a wrapped
/// size is at least `usize::MAX - n + 1 > n - 1` and the two cases never
/// collide.
#[derive(Clone)]
pub struct UnionFind {
    slot: RefCell<Vec<usize>>,
    groups: usize,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "index out of range: {} (len: {})", self.index, self.len)
    }
}

impl std::error::Error for OutOfRange {}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self { slot: RefCell::new(vec![1_usize.wrapping_neg(); n]), groups: n }
    }
    pub fn len(&self) -> usize { self.slot.borrow().len() }

    /// Returns the root of `x`'s set, repointing every node on the walked
    /// path directly at it. Iterative on purpose; a recursive walk
    /// overflows the stack on long uncompressed chains.
    pub fn find(&self, x: usize) -> Result<usize, OutOfRange> {
        let mut slot = self.slot.borrow_mut();
        let len = slot.len();
        if x >= len {
            return Err(OutOfRange { index: x, len });
        }
        let mut root = x;
        while slot[root] < len {
            root = slot[root];
        }
        let mut cur = x;
        while cur != root {
            cur = mem::replace(&mut slot[cur], root);
        }
        Ok(root)
    }

    /// Merges the smaller set into the larger one; on equal sizes the
    /// root of `x` survives. Returns whether a merge occurred.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool, OutOfRange> {
        let x = self.find(x)?;
        let y = self.find(y)?;
        if x == y {
            return Ok(false);
        }

        let mut slot = self.slot.borrow_mut();
        let (par, child) = if slot[x].wrapping_neg() < slot[y].wrapping_neg() {
            (y, x)
        } else {
            (x, y)
        };
        slot[par] = slot[par].wrapping_add(slot[child]);
        slot[child] = par;
        self.groups -= 1;
        Ok(true)
    }

    pub fn same(&self, x: usize, y: usize) -> Result<bool, OutOfRange> {
        Ok(self.find(x)? == self.find(y)?)
    }
    pub fn size(&self, x: usize) -> Result<usize, OutOfRange> {
        let root = self.find(x)?;
        Ok(self.slot.borrow()[root].wrapping_neg())
    }
    pub fn roots(&self) -> Vec<usize> {
        let slot = self.slot.borrow();
        let len = slot.len();
        (0..len).filter(|&i| slot[i] >= len).collect()
    }
    pub fn group_count(&self) -> usize { self.groups }
    pub fn members(&self, x: usize) -> Result<Vec<usize>, OutOfRange> {
        let root = self.find(x)?;
        let len = self.len();
        Ok((0..len).filter(|&i| self.find(i).unwrap() == root).collect())
    }
    pub fn all_group_members(&self) -> BTreeMap<usize, Vec<usize>> {
        let len = self.len();
        let mut groups: BTreeMap<_, Vec<_>> = BTreeMap::new();
        for i in 0..len {
            groups.entry(self.find(i).unwrap()).or_default().push(i);
        }
        groups
    }
}

struct AsSet<'a>(&'a [usize]);
impl fmt::Debug for AsSet<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_set().entries(self.0.iter()).finish()
    }
}

impl fmt::Debug for UnionFind {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups = self.all_group_members();
        fmt.debug_map()
            .entries(groups.iter().map(|(&root, set)| (root, AsSet(set))))
            .finish()
    }
}

impl fmt::Display for UnionFind {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups = self.all_group_members();
        fmt.debug_set().entries(groups.values().map(|set| AsSet(set))).finish()
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    use crate::{OutOfRange, UnionFind};

    fn rng() -> ChaCha20Rng {
        ChaCha20Rng::from_seed([
            0x55, 0xEF, 0xE0, 0x3C, 0x71, 0xDA, 0xFC, 0xAB, 0x5C, 0x1A, 0x9F,
            0xEB, 0xA4, 0x9E, 0x61, 0xE6, 0x1E, 0x7E, 0x29, 0x77, 0x38, 0x9A,
            0xF5, 0x67, 0xF5, 0xDD, 0x07, 0x06, 0xAE, 0xE4, 0x5A, 0xDC,
        ])
    }

    #[test]
    fn sanity_check() {
        let n = 10;
        let mut actual = UnionFind::new(n);
        let mut expected = naive::DisjointSet::new(n);

        let f = |(u, v)| 2_u128.pow(u as _) * 3_u128.pow(v as _) % 625;
        let query = {
            let mut query: Vec<_> =
                (0..n).flat_map(|u| (0..u).map(move |v| (u, v))).collect();
            query.sort_unstable_by_key(|&q| f(q));
            query
        };

        for (u, v) in query {
            assert_eq!(actual.union(u, v).unwrap(), expected.unite(u, v));
            for i in 0..n {
                for j in 0..n {
                    assert_eq!(actual.same(i, j).unwrap(), expected.equiv(i, j));
                }
                assert_eq!(actual.size(i).unwrap(), expected.count(i));
                assert_eq!(actual.members(i).unwrap(), expected.members(i));
            }
            assert_eq!(actual.group_count(), expected.group_count());
        }
    }

    #[test]
    fn random_unions() {
        let n = 60;
        let mut rng = rng();
        let mut actual = UnionFind::new(n);
        let mut expected = naive::DisjointSet::new(n);
        for _ in 0..200 {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            assert_eq!(actual.union(u, v).unwrap(), expected.unite(u, v));
            let w = rng.gen_range(0..n);
            assert_eq!(actual.size(w).unwrap(), expected.count(w));
            assert_eq!(actual.group_count(), expected.group_count());
        }
        for i in 0..n {
            assert_eq!(actual.members(i).unwrap(), expected.members(i));
        }
    }

    #[test]
    fn find_is_idempotent() {
        let mut uf = UnionFind::new(8);
        for &(u, v) in &[(0, 1), (1, 2), (2, 3), (5, 6)] {
            uf.union(u, v).unwrap();
        }
        for i in 0..8 {
            let root = uf.find(i).unwrap();
            assert_eq!(uf.find(root).unwrap(), root);
            assert_eq!(uf.find(i).unwrap(), root);
        }
    }

    #[test]
    fn scenario() {
        let mut uf = UnionFind::new(5);
        assert!(uf.union(0, 1).unwrap());
        assert!(uf.union(1, 2).unwrap());
        assert!(uf.same(0, 2).unwrap());
        assert!(!uf.same(0, 3).unwrap());
        assert_eq!(uf.size(uf.find(0).unwrap()).unwrap(), 3);
        assert_eq!(uf.group_count(), 3);
    }

    #[test]
    fn union_accumulates_sizes() {
        let mut uf = UnionFind::new(10);
        uf.union(0, 1).unwrap();
        uf.union(2, 3).unwrap();
        uf.union(3, 4).unwrap();
        let (a, b) = (uf.size(0).unwrap(), uf.size(2).unwrap());
        assert!(uf.union(0, 2).unwrap());
        assert_eq!(uf.size(0).unwrap(), a + b);
        assert!(!uf.union(1, 4).unwrap());
        assert_eq!(uf.size(0).unwrap(), a + b);
    }

    #[test]
    fn chain_connects_everything() {
        let n = 25;
        let mut uf = UnionFind::new(n);
        assert_eq!(uf.group_count(), n);
        for i in 1..n {
            assert!(uf.union(i - 1, i).unwrap());
        }
        assert_eq!(uf.group_count(), 1);
        assert_eq!(uf.roots().len(), 1);
    }

    #[test]
    fn out_of_range() {
        let mut uf = UnionFind::new(5);
        let err = OutOfRange { index: 5, len: 5 };
        assert_eq!(uf.find(5), Err(err));
        assert_eq!(uf.union(0, 5), Err(err));
        assert_eq!(uf.same(5, 0), Err(err));
        assert_eq!(uf.size(5), Err(err));
        assert_eq!(uf.members(5), Err(err));
        assert_eq!(err.to_string(), "index out of range: 5 (len: 5)");
        // a failing call must not have merged anything
        assert_eq!(uf.group_count(), 5);
    }

    #[test]
    fn debug_fmt() {
        let mut uf = UnionFind::new(8);
        uf.union(1, 5).unwrap();
        uf.union(2, 4).unwrap();
        uf.union(0, 2).unwrap();
        uf.union(1, 6).unwrap();
        uf.union(6, 7).unwrap();
        assert_eq!(format!("{uf}"), "{{1, 5, 6, 7}, {0, 2, 4}, {3}}");
        assert_eq!(
            format!("{uf:?}"),
            "{1: {1, 5, 6, 7}, 2: {0, 2, 4}, 3: {3}}"
        );
    }
}
