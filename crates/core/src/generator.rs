//! Procedural arithmetic and algebra questions for the Math domain.
//!
//! Every rule builds its numbers so the stated answer is reachable with exact
//! integer arithmetic: divisions are synthesized from a product, never drawn
//! independently.

use rand::Rng;

use crate::model::{DifficultyLevel, QuestionSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    const BASIC: [Operator; 3] = [Self::Add, Self::Subtract, Self::Multiply];
    const ALL: [Operator; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    fn pick<R: Rng + ?Sized>(rng: &mut R, choices: &[Operator]) -> Self {
        choices[rng.random_range(0..choices.len())]
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Callers only divide operands that were built as a product of the divisor.
    fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

/// Stateless generator; each call draws fresh numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProceduralGenerator;

impl ProceduralGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generates `count` questions for `level` using the thread-local RNG.
    #[must_use]
    pub fn generate(&self, level: DifficultyLevel, count: usize) -> Vec<QuestionSpec> {
        self.generate_with(&mut rand::rng(), level, count)
    }

    /// Generates `count` questions for `level` from the given RNG.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        level: DifficultyLevel,
        count: usize,
    ) -> Vec<QuestionSpec> {
        (0..count).map(|_| self.question(rng, level)).collect()
    }

    /// Builds a single question for `level`.
    pub fn question<R: Rng + ?Sized>(&self, rng: &mut R, level: DifficultyLevel) -> QuestionSpec {
        match level {
            DifficultyLevel::Easy => basic_operation(rng),
            DifficultyLevel::Medium => four_operation(rng),
            DifficultyLevel::Hard => two_step_expression(rng),
            DifficultyLevel::Expert => linear_equation(rng),
        }
    }
}

// Level 1: a op b with a, b in [1, 12], no division.
fn basic_operation<R: Rng + ?Sized>(rng: &mut R) -> QuestionSpec {
    let a = rng.random_range(1..=12);
    let b = rng.random_range(1..=12);
    let op = Operator::pick(rng, &Operator::BASIC);
    QuestionSpec::numeric(format!("{a} {} {b} = ?", op.symbol()), op.apply(a, b))
}

// Level 2: wider operand ranges, plus exact division.
fn four_operation<R: Rng + ?Sized>(rng: &mut R) -> QuestionSpec {
    match Operator::pick(rng, &Operator::ALL) {
        Operator::Divide => {
            let divisor: i64 = rng.random_range(2..=30);
            let quotient: i64 = rng.random_range(2..=29);
            let dividend = divisor * quotient;
            QuestionSpec::numeric(format!("{dividend} ÷ {divisor} = ?"), quotient)
        }
        Operator::Multiply => {
            let a = rng.random_range(2..=21);
            let b = rng.random_range(2..=21);
            QuestionSpec::numeric(format!("{a} × {b} = ?"), a * b)
        }
        op => {
            let a = rng.random_range(10..=49);
            let b = rng.random_range(10..=49);
            QuestionSpec::numeric(format!("{a} {} {b} = ?", op.symbol()), op.apply(a, b))
        }
    }
}

// Level 3: (A op1 B) op2 C.
//
// A division in the first step is built from a product so `mid` is exact. A
// division in the second step presents `(mid * C) ÷ C`, which hides the first
// step but keeps the answer exactly `mid`.
fn two_step_expression<R: Rng + ?Sized>(rng: &mut R) -> QuestionSpec {
    let op1 = Operator::pick(rng, &Operator::ALL);
    let op2 = Operator::pick(rng, &Operator::ALL);
    let a: i64 = rng.random_range(2..=21);
    let b: i64 = rng.random_range(2..=21);

    let (mid, first_step) = if op1 == Operator::Divide {
        let dividend = a * b;
        (b, format!("{dividend} ÷ {a}"))
    } else {
        (op1.apply(a, b), format!("{a} {} {b}", op1.symbol()))
    };

    let c: i64 = rng.random_range(2..=21);
    if op2 == Operator::Divide {
        QuestionSpec::numeric(format!("({} ÷ {c}) = ?", mid * c), mid)
    } else {
        QuestionSpec::numeric(
            format!("({first_step}) {} {c} = ?", op2.symbol()),
            op2.apply(mid, c),
        )
    }
}

// Level 4: solve a·x + b = c for x.
fn linear_equation<R: Rng + ?Sized>(rng: &mut R) -> QuestionSpec {
    let a: i64 = rng.random_range(2..=10);
    let x: i64 = rng.random_range(-10..=10);
    let b: i64 = rng.random_range(-20..=20);
    let c = a * x + b;
    let constant = if b < 0 {
        format!("- {}", b.abs())
    } else {
        format!("+ {b}")
    };
    QuestionSpec::numeric(format!("Solve for x: {a}x {constant} = {c}"), x)
}
