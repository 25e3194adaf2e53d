use std::fmt;

use crate::expression::ast::Expression;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn precedence(expr: &Expression) -> u8 {
            match expr {
                Expression::Add(_, _) => 1,
                Expression::Multiply(_, _) => 2,
                Expression::Constant(_) | Expression::Symbol(_) => 3,
            }
        }

        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Constant(n) => write!(f, "{}", n),
                Expression::Symbol(name) => write!(f, "{}", name),
                Expression::Add(l, r) => {
                    fmt_expression(f, l)?;
                    write!(f, " + ")?;
                    fmt_expression(f, r)
                }
                Expression::Multiply(l, r) => {
                    write_with_parens(f, l, precedence(l) < 2)?;
                    write!(f, " * ")?;
                    write_with_parens(f, r, precedence(r) < 2)
                }
            }
        }

        fmt_expression(f, self)
    }
}
