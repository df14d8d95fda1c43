use std::{fmt, ops};

/// Markers describing the shape of a query.
///
/// The `IN_*` flags describe which stage is being translated and only live
/// for the duration of a walk. The rest accumulate into the compiled query.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct ShapeFlags(u16);

impl ShapeFlags {
    pub const EMPTY: ShapeFlags = ShapeFlags(0);
    pub const IN_TAKE: ShapeFlags = ShapeFlags(1 << 0);
    pub const IN_SKIP: ShapeFlags = ShapeFlags(1 << 1);
    pub const IN_NOT: ShapeFlags = ShapeFlags(1 << 2);
    pub const HAS_MEMBER: ShapeFlags = ShapeFlags(1 << 3);
    pub const HAS_CONSTANT_BOOLEAN: ShapeFlags = ShapeFlags(1 << 4);
    pub const HAS_INEQUALITY: ShapeFlags = ShapeFlags(1 << 5);
    pub const IS_FIRST: ShapeFlags = ShapeFlags(1 << 6);
    pub const IS_SINGLE: ShapeFlags = ShapeFlags(1 << 7);
    pub const IS_ANY: ShapeFlags = ShapeFlags(1 << 8);
    pub const ALLOW_DEFAULT: ShapeFlags = ShapeFlags(1 << 9);

    const NAMES: [(ShapeFlags, &'static str); 10] = [
        (Self::IN_TAKE, "IN_TAKE"),
        (Self::IN_SKIP, "IN_SKIP"),
        (Self::IN_NOT, "IN_NOT"),
        (Self::HAS_MEMBER, "HAS_MEMBER"),
        (Self::HAS_CONSTANT_BOOLEAN, "HAS_CONSTANT_BOOLEAN"),
        (Self::HAS_INEQUALITY, "HAS_INEQUALITY"),
        (Self::IS_FIRST, "IS_FIRST"),
        (Self::IS_SINGLE, "IS_SINGLE"),
        (Self::IS_ANY, "IS_ANY"),
        (Self::ALLOW_DEFAULT, "ALLOW_DEFAULT"),
    ];

    pub const fn contains(self, other: ShapeFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn with(self, other: ShapeFlags) -> ShapeFlags {
        ShapeFlags(self.0 | other.0)
    }

    pub fn insert(&mut self, other: ShapeFlags) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: ShapeFlags) {
        self.0 &= !other.0;
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl ops::BitOr for ShapeFlags {
    type Output = ShapeFlags;

    fn bitor(self, rhs: ShapeFlags) -> ShapeFlags {
        self.with(rhs)
    }
}

impl ops::BitOrAssign for ShapeFlags {
    fn bitor_assign(&mut self, rhs: ShapeFlags) {
        self.insert(rhs);
    }
}

impl fmt::Debug for ShapeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                set.entry(&format_args!("{name}"));
            }
        }
        set.finish()
    }
}
