use gql_core::stmt::{BinaryOp, Direction};

/// One piece of a query, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// `SELECT`
    Select,

    /// The projected column list, or `*`
    Projection(String),

    /// `FROM`
    From,

    /// The kind being queried
    Kind(String),

    /// `WHERE`
    Where,

    /// `AND` between two conditions
    And,

    /// A comparison operator
    Operator(BinaryOp),

    /// A property name, or the key column
    Member(String),

    /// A named parameter placeholder
    Param(String),

    /// Literal query text, such as `NULL`
    Constant(String),

    /// Marks that a `LIMIT` clause is present
    Take,

    /// Marks that an `OFFSET` clause is present
    Skip,

    /// Marks that an `ORDER BY` clause is present
    OrderBy(Direction),

    /// The ordering property
    OrderByField(String),
}

impl Fragment {
    /// Singleton fragments appear at most once per query.
    pub fn is_singleton(&self) -> bool {
        !matches!(
            self,
            Fragment::And
                | Fragment::Operator(_)
                | Fragment::Member(_)
                | Fragment::Param(_)
                | Fragment::Constant(_)
        )
    }

    fn same_kind(&self, other: &Fragment) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// An ordered fragment sequence for a single query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ast {
    fragments: Vec<Fragment>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment. A singleton fragment whose kind is already present
    /// is dropped.
    pub fn push(&mut self, fragment: Fragment) {
        if fragment.is_singleton() && self.contains(&fragment) {
            tracing::trace!(?fragment, "dropping repeated fragment");
            return;
        }

        self.fragments.push(fragment);
    }

    pub fn extend(&mut self, fragments: impl IntoIterator<Item = Fragment>) {
        for fragment in fragments {
            self.push(fragment);
        }
    }

    /// Returns `true` if a fragment of the same kind is present.
    pub fn contains(&self, fragment: &Fragment) -> bool {
        self.fragments.iter().any(|f| f.same_kind(fragment))
    }

    pub fn has_where(&self) -> bool {
        self.contains(&Fragment::Where)
    }

    /// Removes the `WHERE` clause when it holds no property reference.
    ///
    /// Condition fragments only ever belong to the `WHERE` clause, so the
    /// clause is the `WHERE` fragment plus every non-singleton fragment.
    pub fn remove_where(&mut self) -> bool {
        if !self.has_where() {
            return false;
        }

        if self.fragments.iter().any(|f| matches!(f, Fragment::Member(_))) {
            return false;
        }

        self.fragments
            .retain(|f| f.is_singleton() && *f != Fragment::Where);
        true
    }

    /// Property names referenced by the query's conditions and ordering, in
    /// order of appearance.
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.fragments.iter().filter_map(|f| match f {
            Fragment::Member(name) | Fragment::OrderByField(name) => Some(&name[..]),
            _ => None,
        })
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
