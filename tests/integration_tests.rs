//! Integration tests for mathtext conversion

use mathtext::{
    convert, convert_with_diagnostics, convert_with_options, ConvertOptions, STANDARD_PIPELINE,
};

// ============================================================================
// Basic constructs
// ============================================================================

mod basics {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fractions() {
        assert_eq!(convert(r"\frac{a}{b}"), "a/b");
        assert_eq!(convert(r"\frac{x+1}{2}"), "(x+1)/(2)");
        assert_eq!(convert(r"\frac{1}{1+\frac{1}{x}}"), "(1)/(1+1/x)");
    }

    #[test]
    fn test_roots() {
        assert_eq!(convert(r"\sqrt{4}"), "√4");
        assert_eq!(convert(r"\sqrt[3]{8}"), "³√(8)");
        assert_eq!(convert(r"\sqrt{x+1}"), "√(x+1)");
    }

    #[test]
    fn test_scripts() {
        assert_eq!(convert("x^{2}"), "x²");
        assert_eq!(convert("x_{1}"), "x₁");
        assert_eq!(convert("x^{αβ}"), "x^{αβ}");
    }

    #[test]
    fn test_greek_letters() {
        assert_eq!(convert(r"\alpha + \beta"), "α + β");
        assert_eq!(convert(r"\Gamma(\theta)"), "Γ(θ)");
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(convert(r"\left(\frac{1}{2}\right)"), "(1/2)");
        assert_eq!(convert(r"\left\langle x, y \right\rangle"), "⟨ x, y ⟩");
        assert_eq!(convert(r"\left\{ x \right\}"), "❴ x ❵");
        assert_eq!(convert(r"\|v\|"), "‖v‖");
        assert_eq!(convert(r"\left. f \right|_{0}"), "f |₀");
    }

    #[test]
    fn test_functions() {
        assert_eq!(convert(r"\sin^2 x + \cos^2 x = 1"), "sin² x + cos² x = 1");
        assert_eq!(convert(r"\operatorname{rank}(A)"), "rank(A)");
        assert_eq!(convert(r"\mathrm{ln}\,x"), "ln x");
    }

    #[test]
    fn test_text_and_fonts() {
        assert_eq!(convert(r"\text{if } x > 0"), "if x > 0");
        assert_eq!(convert(r"\mathbf{v} \cdot \mathbf{w}"), "v · w");
        assert_eq!(convert(r"50\%"), "50%");
    }

    #[test]
    fn test_spacing() {
        assert_eq!(convert(r"a\,b\quad c"), "a b c");
        assert_eq!(
            convert_with_options(r"a\quad b", &ConvertOptions::layout()),
            "a b"
        );
    }
}

// ============================================================================
// Formulas combining several stages
// ============================================================================

mod formulas {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quadratic_formula() {
        assert_eq!(
            convert(r"x = \frac{-b \pm \sqrt{b^2 - 4ac}}{2a}"),
            "x = (-b ± √(b² - 4ac))/(2a)"
        );
    }

    #[test]
    fn test_sum_with_bounds() {
        assert_eq!(convert(r"\sum_{i=1}^{n} i^2"), "∑_{i=1}ⁿ i²");
    }

    #[test]
    fn test_gaussian_integral() {
        assert_eq!(convert(r"\int_0^\infty e^{-x^2} dx"), "∫₀^∞ e^{-x²} dx");
    }

    #[test]
    fn test_limit() {
        assert_eq!(
            convert(r"\lim_{x \to 0} \frac{\sin x}{x}"),
            "lim_{x → 0} (sin x)/(x)"
        );
    }

    #[test]
    fn test_unicode_passthrough() {
        assert_eq!(convert("αβ + 1 ≤ ∞"), "αβ + 1 ≤ ∞");
    }
}

// ============================================================================
// Matrices
// ============================================================================

mod matrices {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pmatrix_layout() {
        assert_eq!(
            convert_with_options(
                r"\begin{pmatrix}1&2\\3&4\end{pmatrix}",
                &ConvertOptions::layout()
            ),
            "(\n1\t2\n3\t4\n)"
        );
    }

    #[test]
    fn test_pmatrix_default_is_single_line() {
        assert_eq!(
            convert(r"\begin{pmatrix}1&2\\3&4\end{pmatrix}"),
            "( 1 2 3 4 )"
        );
    }

    #[test]
    fn test_bmatrix_with_symbols() {
        assert_eq!(
            convert_with_options(
                r"\begin{bmatrix} \alpha & \beta \\ \gamma & \delta \end{bmatrix}",
                &ConvertOptions::layout()
            ),
            "[\nα\tβ\nγ\tδ\n]"
        );
    }

    #[test]
    fn test_array() {
        assert_eq!(
            convert_with_options(
                r"\begin{array}{cc} a & b \\ c & d \end{array}",
                &ConvertOptions::layout()
            ),
            "a\tb\nc\td"
        );
    }
}

// ============================================================================
// Options
// ============================================================================

mod options {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ascii_scripts() {
        assert_eq!(
            convert_with_options(r"x^{2} + \sqrt[n]{y}", &ConvertOptions::ascii()),
            "x^{2} + n√(y)"
        );
    }

    #[test]
    fn test_operand_length() {
        let options = ConvertOptions {
            simple_operand_len: 5,
            ..ConvertOptions::default()
        };
        assert_eq!(convert_with_options(r"\frac{abcd}{2}", &options), "abcd/2");
    }

    #[test]
    fn test_zero_passes_rejected() {
        assert!(ConvertOptions::new().with_max_fraction_passes(0).is_err());
    }
}

// ============================================================================
// Edge cases
// ============================================================================

mod edge_cases {
    use super::*;
    use pretty_assertions::assert_eq;
    use mathtext::stages::CleanupStage;
    use mathtext::Pipeline;

    #[test]
    fn test_empty_input() {
        assert_eq!(convert(""), "");
        let output = convert_with_diagnostics("", &ConvertOptions::default());
        assert!(!output.has_warnings());
    }

    #[test]
    fn test_unknown_command() {
        let output = convert_with_diagnostics(r"\foo + 1", &ConvertOptions::default());
        assert_eq!(output.content, "foo + 1");
        assert_eq!(output.warnings.len(), 1);
        assert_eq!(output.warnings[0].stage, "cleanup");
    }

    #[test]
    fn test_unknown_command_arguments_stay_apart() {
        let output = convert_with_diagnostics(r"\binom{n}{k}", &ConvertOptions::default());
        assert_eq!(output.content, "binom n k");
        assert_eq!(output.warnings.len(), 1);
    }

    #[test]
    fn test_unterminated_constructs_never_panic() {
        for input in [r"\frac{a}{b", r"\sqrt{", "x^{", r"\begin{pmatrix}1&2", "}}}", "\\"] {
            let output = convert_with_diagnostics(input, &ConvertOptions::default());
            assert!(!output.content.contains('\\'), "input: {}", input);
        }
    }

    #[test]
    fn test_deep_fraction_nesting_hits_pass_limit() {
        let mut src = String::from("1");
        for _ in 0..20 {
            src = format!(r"\frac{{{}}}{{2}}", src);
        }
        let output = convert_with_diagnostics(&src, &ConvertOptions::default());
        assert!(output.warnings.iter().any(|w| w.stage == "fraction"));
    }

    #[test]
    fn test_deep_root_nesting() {
        let src = format!("{}x{}", r"\sqrt{".repeat(100), "}".repeat(100));
        let out = convert(&src);
        assert!(out.starts_with('√'));
    }

    #[test]
    fn test_unsupported_environment_degrades_to_text() {
        let output = convert_with_diagnostics(
            r"\begin{cases} 1 & x > 0 \\ 0 & \text{otherwise} \end{cases}",
            &ConvertOptions::default(),
        );
        assert!(output.content.contains("otherwise"));
        assert!(output.has_warnings());
    }

    #[test]
    fn test_cleanup_is_idempotent_on_output() {
        let cleanup = Pipeline::from_stages(vec![Box::new(CleanupStage)]);
        for input in [
            r"\sum_{i=1}^{n} x_{ij}",
            r"\foo{bar} \{ a \}",
            r"\frac{a}{b} + e^{x^{2}}",
        ] {
            let once = convert(input);
            let twice = cleanup.run(&once, &ConvertOptions::default());
            assert_eq!(twice.content, once);
            assert!(!twice.has_warnings());
        }
    }
}

// ============================================================================
// Pipeline
// ============================================================================

mod pipeline {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_stage_order() {
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
    fn test_trace() {
        let traces = mathtext::trace(r"\sqrt{\alpha}", &ConvertOptions::default());
        assert_eq!(traces[1].stage, "root");
        assert_eq!(traces[1].output, r"√(\alpha)");
        assert_eq!(traces[5].stage, "symbol");
        assert_eq!(traces[7].output, "√(α)");
    }

    #[test]
    fn test_parallel_callers() {
        let inputs = [
            r"\frac{a}{b}",
            r"\sqrt[3]{8}",
            r"\alpha + \beta",
            r"\begin{pmatrix}1&2\\3&4\end{pmatrix}",
        ];
        let expected: Vec<String> = inputs.iter().map(|s| convert(s)).collect();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| inputs.iter().map(|s| convert(s)).collect::<Vec<_>>()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

mod diagnostics {
    use mathtext::diagnostics::{check_math, format_diagnostics};

    #[test]
    fn test_check_clean_formula() {
        let result = check_math(r"\frac{-b \pm \sqrt{b^2 - 4ac}}{2a}");
        assert!(result.is_empty());
    }

    #[test]
    fn test_check_reports_problems() {
        let result = check_math("\\begin{pmatrix}1 & 2\n\\frac{1}");
        assert!(result.has_errors());
        let report = format_diagnostics(&result, false);
        assert!(report.contains("unclosed environment 'pmatrix'"));
        assert!(report.contains("line 2:1"));
    }

    #[test]
    fn test_check_notes_unconverted_environment() {
        let result = check_math(r"\begin{cases} 1 & x > 0 \\ 0 & x \le 0 \end{cases}");
        assert!(!result.has_errors());
        assert_eq!(result.infos, 1);
        assert!(format_diagnostics(&result, false).ends_with("Summary: 1 note"));
    }
}
