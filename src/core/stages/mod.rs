//! Rewrite stages
//!
//! Each stage is a unit struct implementing [`Stage`](super::pipeline::Stage).
//! They are listed here in pipeline order.

pub mod fraction;
pub mod root;
pub mod script;
pub mod function;
pub mod matrix;
pub mod symbol;
pub mod delimiter;
pub mod cleanup;

pub use cleanup::CleanupStage;
pub use delimiter::DelimiterStage;
pub use fraction::FractionStage;
pub use function::FunctionStage;
pub use matrix::{MatrixKind, MatrixStage};
pub use root::RootStage;
pub use script::ScriptStage;
pub use symbol::SymbolStage;

#[cfg(test)]
pub(crate) fn run_stage(stage: &dyn super::pipeline::Stage, input: &str) -> String {
    run_stage_with(stage, input, &super::context::ConvertOptions::default()).0
}

#[cfg(test)]
pub(crate) fn run_stage_with(
    stage: &dyn super::pipeline::Stage,
    input: &str,
    options: &super::context::ConvertOptions,
) -> (String, Vec<crate::utils::error::ConversionWarning>) {
    let mut ctx = super::context::StageContext::new(options);
    let out = stage.apply(input, &mut ctx);
    (out, ctx.warnings)
}
