use crate::expression::{Expression, add, constant, multiply, variable};

/// An expression with a short name to select it by
#[derive(Debug, Clone)]
pub struct Sample {
    pub name: &'static str,
    pub expression: Expression,
}

impl Sample {
    fn new(name: &'static str, expression: Expression) -> Self {
        Self { name, expression }
    }
}

pub fn samples() -> Vec<Sample> {
    vec![
        Sample::new("constant", constant(3.0)),
        Sample::new("variable", variable()),
        Sample::new("sum", add(3.0, "x")),
        Sample::new("nested_sum", add(3.0, add("x", 4.0))),
        Sample::new("product", multiply(3.0, "x")),
        Sample::new("cross", multiply("x", "y")),
        Sample::new("square", multiply("x", "x")),
        Sample::new("offset_square", add(3.0, multiply("x", "x"))),
        // 3 + 2x + x^3
        Sample::new(
            "cubic",
            add(
                3.0,
                add(multiply(2.0, "x"), multiply("x", multiply("x", "x"))),
            ),
        ),
    ]
}

pub fn find(name: &str) -> Option<Sample> {
    samples().into_iter().find(|sample| sample.name == name)
}
