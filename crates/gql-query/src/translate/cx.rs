use crate::ShapeFlags;

/// Context passed down a walk.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct Cx {
    /// Only `IN_*` flags are meaningful here.
    pub(super) flags: ShapeFlags,

    /// Number of enclosing conjunctions
    pub(super) depth: usize,
}

/// What a walk observed, merged upward into the translator's shape.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct Outcome {
    pub(super) flags: ShapeFlags,

    /// The walk ended on a boolean member with no comparison attached.
    pub(super) uncompleted_bool: bool,
}

impl Cx {
    pub(super) fn root() -> Cx {
        Cx::default()
    }

    pub(super) fn with(self, flag: ShapeFlags) -> Cx {
        Cx {
            flags: self.flags | flag,
            ..self
        }
    }

    pub(super) fn nested(self) -> Cx {
        Cx {
            depth: self.depth + 1,
            ..self
        }
    }
}

impl Outcome {
    pub(super) fn flagged(flags: ShapeFlags) -> Outcome {
        Outcome {
            flags,
            uncompleted_bool: false,
        }
    }

    pub(super) fn merge(&mut self, other: Outcome) {
        self.flags |= other.flags;
        self.uncompleted_bool = other.uncompleted_bool;
    }
}
