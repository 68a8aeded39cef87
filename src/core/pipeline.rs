//! The ordered rewrite pipeline
//!
//! A [`Pipeline`] is a fixed list of [`Stage`]s. Each stage receives the
//! previous stage's output. The standard order matters: the structural
//! stages (fraction, root, script, matrix) need intact command syntax that
//! the symbol stage would partially consume, and cleanup discards whatever
//! is still unresolved, so it must come last.

use lazy_static::lazy_static;

use super::context::{ConvertOptions, StageContext};
use super::stages::{
    CleanupStage, DelimiterStage, FractionStage, FunctionStage, MatrixStage, RootStage,
    ScriptStage, SymbolStage,
};
use crate::utils::error::ConversionOutput;

/// One pure rewrite pass
pub trait Stage: Send + Sync {
    /// Short stable name, used in warnings and traces
    fn name(&self) -> &'static str;

    /// Rewrite `input`. Must not fail; unresolvable constructs stay literal.
    fn apply(&self, input: &str, ctx: &mut StageContext<'_>) -> String;
}

/// Output of a single stage, as recorded by [`Pipeline::trace`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageTrace {
    pub stage: &'static str,
    pub output: String,
}

lazy_static! {
    /// The standard pipeline, built once and shared by every conversion
    pub static ref STANDARD_PIPELINE: Pipeline = Pipeline::standard();
}

/// An ordered list of stages
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// fraction → root → script → function → matrix → symbol → delimiter → cleanup
    pub fn standard() -> Self {
        Self::from_stages(vec![
            Box::new(FractionStage),
            Box::new(RootStage),
            Box::new(ScriptStage),
            Box::new(FunctionStage),
            Box::new(MatrixStage),
            Box::new(SymbolStage),
            Box::new(DelimiterStage),
            Box::new(CleanupStage),
        ])
    }

    pub fn from_stages(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Stage names in execution order
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every stage over `input`
    pub fn run(&self, input: &str, options: &ConvertOptions) -> ConversionOutput {
        let mut ctx = StageContext::new(options);
        let content = self.run_with(input, &mut ctx);
        ConversionOutput::with_warnings(content, ctx.warnings)
    }

    /// Run every stage with a caller-provided context
    pub fn run_with(&self, input: &str, ctx: &mut StageContext<'_>) -> String {
        if input.is_empty() {
            return String::new();
        }
        self.stages
            .iter()
            .fold(input.to_string(), |text, stage| stage.apply(&text, ctx))
    }

    /// Run every stage, keeping each intermediate result
    pub fn trace(&self, input: &str, options: &ConvertOptions) -> Vec<StageTrace> {
        let mut ctx = StageContext::new(options);
        let mut text = input.to_string();
        let mut traces = Vec::with_capacity(self.stages.len());
        for stage in &self.stages {
            text = stage.apply(&text, &mut ctx);
            traces.push(StageTrace {
                stage: stage.name(),
                output: text.clone(),
            });
        }
        traces
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Stage for Upper {
        fn name(&self) -> &'static str {
            "upper"
        }

        fn apply(&self, input: &str, _ctx: &mut StageContext<'_>) -> String {
            input.to_uppercase()
        }
    }

    struct Exclaim;

    impl Stage for Exclaim {
        fn name(&self) -> &'static str {
            "exclaim"
        }

        fn apply(&self, input: &str, ctx: &mut StageContext<'_>) -> String {
            ctx.warn(self.name(), "shouting");
            format!("{}!", input)
        }
    }

    #[test]
    fn test_standard_order() {
        assert_eq!(
            STANDARD_PIPELINE.stage_names(),
            vec![
                "fraction",
                "root",
                "script",
                "function",
                "matrix",
                "symbol",
                "delimiter",
                "cleanup"
            ]
        );
    }

    #[test]
    fn test_custom_pipeline_runs_in_order() {
        let pipeline = Pipeline::from_stages(vec![Box::new(Upper), Box::new(Exclaim)]);
        let output = pipeline.run("abc", &ConvertOptions::default());
        assert_eq!(output.content, "ABC!");
        assert_eq!(output.warnings.len(), 1);
        assert_eq!(output.warnings[0].stage, "exclaim");
    }

    #[test]
    fn test_empty_input() {
        let output = STANDARD_PIPELINE.run("", &ConvertOptions::default());
        assert_eq!(output.content, "");
        assert!(!output.has_warnings());
    }

    #[test]
    fn test_trace_records_every_stage() {
        let traces = STANDARD_PIPELINE.trace(r"\frac{a}{b}", &ConvertOptions::default());
        assert_eq!(traces.len(), 8);
        assert_eq!(traces[0].stage, "fraction");
        assert_eq!(traces[0].output, "a/b");
        assert_eq!(traces.last().unwrap().output, "a/b");
    }

    #[test]
    fn test_symbol_table_leaves_structural_commands() {
        let reordered = Pipeline::from_stages(vec![
            Box::new(SymbolStage),
            Box::new(RootStage),
            Box::new(CleanupStage),
        ]);
        let output = reordered.run(r"\sqrt{\alpha}", &ConvertOptions::default());
        assert_eq!(output.content, "√α");
    }

    #[test]
    fn test_cleanup_first_loses_structure() {
        let reordered =
            Pipeline::from_stages(vec![Box::new(CleanupStage), Box::new(FractionStage)]);
        let output = reordered.run(r"\frac{1}{2}", &ConvertOptions::default());
        assert_eq!(output.content, "frac 12");
    }
}
