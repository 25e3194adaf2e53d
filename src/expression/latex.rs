use crate::expression::ast::Expression;

impl Expression {
    /// Render the expression as LaTeX without hiding numeric factors.
    /// - Uses \cdot for multiplication
    /// - Wraps multi-character symbols in \mathrm
    pub fn to_latex(&self) -> String {
        fn wrap_parens(s: String) -> String {
            format!("\\left({}\\right)", s)
        }

        fn fmt(expr: &Expression) -> String {
            match expr {
                Expression::Constant(n) => number_to_string(*n),
                Expression::Symbol(name) => symbol_to_string(name),
                Expression::Add(l, r) => format!("{} + {}", fmt(l), fmt(r)),
                Expression::Multiply(l, r) => {
                    let mut ls = fmt(l);
                    let mut rs = fmt(r);
                    if matches!(l.as_ref(), Expression::Add(_, _)) {
                        ls = wrap_parens(ls);
                    }
                    if matches!(r.as_ref(), Expression::Add(_, _)) {
                        rs = wrap_parens(rs);
                    }
                    format!("{} \\cdot {}", ls, rs)
                }
            }
        }

        fn symbol_to_string(name: &str) -> String {
            let escaped = name.replace('_', "\\_");
            if name.chars().count() == 1 {
                escaped
            } else {
                format!("\\mathrm{{{}}}", escaped)
            }
        }

        fn number_to_string(n: f64) -> String {
            if (n.fract() == 0.0) && n.is_finite() && n.abs() < 1e18 {
                format!("{}", n.trunc() as i64)
            } else if n.is_infinite() {
                if n.is_sign_positive() {
                    String::from("\\infty")
                } else {
                    String::from("-\\infty")
                }
            } else if n.is_nan() {
                String::from("\\mathrm{NaN}")
            } else {
                format!("{}", n)
            }
        }

        fmt(self)
    }
}
