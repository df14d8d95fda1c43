//! Common imports for test files
//!
//! This module provides a convenient way to import frequently used items
//! in test files with `use tests::prelude::*;`

pub use crate::models::{entity, Color, TestModel};
pub use crate::{setup, setup_with, ExecLog, LoggingTransport, TransportOp};

pub use gql::{captured, literal, Config, Db, Error, Model, Query, Row, Value};

pub use std_util::prelude::*;
