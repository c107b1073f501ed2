//! Drive operations, grouped by the utility they are built on.

mod attributes;
mod logs;
mod navigation;
mod positioning;
mod status;
