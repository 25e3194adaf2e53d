use std::collections::BTreeSet;
use std::mem;

/// An arithmetic expression over constants and named symbols
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Constant(f64),
    Symbol(String),
    Add(Box<Expression>, Box<Expression>),
    Multiply(Box<Expression>, Box<Expression>),
}

/// Value and first derivative of an expression at one binding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    pub derivative: f64,
}

impl Expression {
    /// Distinct symbol names appearing anywhere in the tree, sorted.
    pub fn symbols(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        let mut pending = vec![self];

        while let Some(expr) = pending.pop() {
            match expr {
                Expression::Constant(_) => {}
                Expression::Symbol(name) => {
                    names.insert(name.as_str());
                }
                Expression::Add(l, r) | Expression::Multiply(l, r) => {
                    pending.push(r);
                    pending.push(l);
                }
            }
        }

        names
    }

    /// Number of node levels; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];

        while let Some((expr, level)) = pending.pop() {
            deepest = deepest.max(level);
            if let Expression::Add(l, r) | Expression::Multiply(l, r) = expr {
                pending.push((r.as_ref(), level + 1));
                pending.push((l.as_ref(), level + 1));
            }
        }

        deepest
    }

    /// Moves both children of an operation node onto `pending`, leaving
    /// constants in their place.
    fn detach_children(&mut self, pending: &mut Vec<Expression>) {
        if let Expression::Add(l, r) | Expression::Multiply(l, r) = self {
            pending.push(mem::replace(&mut **l, Expression::Constant(0.0)));
            pending.push(mem::replace(&mut **r, Expression::Constant(0.0)));
        }
    }
}

// Dropping boxed children recursively overflows the stack on deep trees.
impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);

        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}
