
use thiserror::Error;

use crate::{
    environment::prelude::Environment,
    parser::prelude::Expr,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error("variable `{name}` is not defined")]
    UndefinedVariable {
        name: String
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("unknown operator `{op}`")]
    UnknownOperator {
        op: String
    },
}

pub fn eval(expr: &Expr, env: &Environment) -> Result<f64, RuntimeError> {
    match expr {
        Expr::Number { value } => Ok(*value),
        Expr::Variable { name } => match env.get(name) {
            Some(value) => Ok(value),
            None => Err(RuntimeError::UndefinedVariable { name: name.clone() })
        },
        Expr::Binary { op, left, right } => {
            // both sides always run, left first
            let left = eval(left, env)?;
            let right = eval(right, env)?;

            match op.as_str() {
                "+" => Ok(left + right),
                "-" => Ok(left - right),
                "*" => Ok(left * right),
                "/" => {
                    if right == 0.0 {
                        Err(RuntimeError::DivisionByZero)
                    } else {
                        Ok(left / right)
                    }
                },
                // unreachable through the grammar
                _ => Err(RuntimeError::UnknownOperator { op: op.clone() })
            }
        }
    }
}
