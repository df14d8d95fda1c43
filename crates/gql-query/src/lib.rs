//! Translates query pipelines into parameterized GQL text.
//!
//! [`compile`] produces the executable form of a pipeline: query text with
//! named `@` placeholders, the bound parameters and the projection plan.
//! [`to_display_text`] renders the same pipeline with every parameter
//! substituted inline, for diagnostics.

mod ast;
pub use ast::{Ast, Fragment};

mod compiled;
pub use compiled::{Compiled, Param, ProjectionPlan};

mod display;
pub use display::display_value;

mod render;
pub use render::{render, Inline, Named, Params};

mod shape;
pub use shape::ShapeFlags;

mod translate;
pub use translate::{Mode, Translator};

use gql_core::{stmt::Pipeline, Result};

/// Reserved parameter name bound by a Take stage.
pub const TAKE_PARAM: &str = "qlim";

/// Reserved parameter name bound by a Skip stage.
pub const SKIP_PARAM: &str = "qoffset";

/// Compile a pipeline for execution.
///
/// Each call translates from scratch; compiling the same pipeline twice
/// yields identical text and parameters.
pub fn compile(pipeline: &Pipeline) -> Result<Compiled> {
    Translator::new(pipeline, Mode::Strict).translate()
}

/// Render a pipeline as human readable query text with parameters inlined.
///
/// Repeated Take or Skip stages are collapsed rather than rejected.
pub fn to_display_text(pipeline: &Pipeline) -> Result<String> {
    let compiled = Translator::new(pipeline, Mode::Collapsing).translate()?;
    compiled.display_text()
}
