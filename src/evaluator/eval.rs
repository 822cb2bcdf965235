use std::sync::Arc;

use tracing::{debug, trace};

use crate::ast::{
    BlockStatement, CallExpression, Expression, FunctionLiteral, IfExpression, Infix, Prefix,
    Program, Statement,
};
use crate::error::EvalError;
use crate::object::{native_bool, Env, Environment, Function, Object, Value, NULL};

/// Why evaluation stopped early. `Return` unwinds to the nearest call (or the
/// program) and is not an error.
#[derive(Debug)]
enum ControlAction {
    Error(EvalError),
    Return(Value),
}

impl From<EvalError> for ControlAction {
    fn from(error: EvalError) -> Self {
        Self::Error(error)
    }
}

type EvalResult = Result<Value, ControlAction>;

pub struct Evaluator {
    pub environment: Env,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            environment: Environment::new().into_shared(),
        }
    }

    pub fn new_with_env(environment: Env) -> Self {
        Self { environment }
    }

    /// Runs every statement in order; the last one's value is the result.
    /// A top-level `return` ends the program with its value.
    pub fn eval_program(&self, program: &Program) -> Result<Value, EvalError> {
        unwrap_return_value(self.eval_statements(&program.statements))
    }

    fn eval_statements(&self, statements: &[Statement]) -> EvalResult {
        let mut result = Arc::clone(&NULL);
        for statement in statements {
            result = self.eval_statement(statement)?;
        }

        Ok(result)
    }

    fn eval_block(&self, block: &BlockStatement) -> EvalResult {
        self.eval_statements(&block.statements)
    }

    fn eval_statement(&self, statement: &Statement) -> EvalResult {
        match statement {
            Statement::ExpressionStmt(stmt) => self.eval_expr(&stmt.expression),
            Statement::Let(stmt) => {
                let val = self.eval_expr(&stmt.value)?;
                trace!(name = %stmt.name, value = %val, "bind");
                self.environment.write().set(stmt.name.name.as_str(), val);
                Ok(Arc::clone(&NULL))
            }
            Statement::Return(stmt) => {
                let val = match &stmt.value {
                    Some(expr) => self.eval_expr(expr)?,
                    None => Arc::clone(&NULL),
                };
                Err(ControlAction::Return(val))
            }
        }
    }

    fn eval_expr(&self, expr: &Expression) -> EvalResult {
        match expr {
            Expression::IntLiteral(lit) => Ok(Arc::new(Object::Integer(lit.value))),
            Expression::Boolean(lit) => Ok(native_bool(lit.value)),
            Expression::PrefixExpr(expr) => {
                let right = self.eval_expr(&expr.operand)?;
                Ok(eval_prefix_expression(expr.operator, &right)?)
            }
            Expression::InfixExpr(expr) => {
                let left = self.eval_expr(&expr.left)?;
                let right = self.eval_expr(&expr.right)?;
                Ok(eval_infix_expression(expr.operator, &left, &right)?)
            }
            Expression::IfExpr(expr) => self.eval_if_expression(expr),
            Expression::Ident(ident) => self
                .environment
                .read()
                .get(&ident.name)
                .ok_or_else(|| EvalError::IdentifierNotFound(ident.name.clone()).into()),
            Expression::FnLiteral(lit) => Ok(self.eval_function_literal(lit)),
            Expression::Call(call) => self.eval_call_expression(call),
        }
    }

    fn eval_if_expression(&self, expr: &IfExpression) -> EvalResult {
        let condition = self.eval_expr(&expr.condition)?;
        if is_truthy(&condition) {
            self.eval_block(&expr.consequence)
        } else if let Some(alternative) = &expr.alternative {
            self.eval_block(alternative)
        } else {
            Ok(Arc::clone(&NULL))
        }
    }

    fn eval_function_literal(&self, lit: &FunctionLiteral) -> Value {
        Arc::new(Object::Function(Function {
            parameters: Arc::clone(&lit.parameters),
            body: Arc::clone(&lit.body),
            env: Arc::clone(&self.environment),
        }))
    }

    fn eval_call_expression(&self, call: &CallExpression) -> EvalResult {
        let function = self.eval_expr(&call.callee)?;
        let args = call
            .arguments
            .iter()
            .map(|arg| self.eval_expr(arg))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(apply_function(&function, args)?)
    }
}

/// Evaluates `program` against an existing scope, keeping its bindings.
pub fn eval(program: &Program, env: &Env) -> Result<Value, EvalError> {
    Evaluator::new_with_env(Arc::clone(env)).eval_program(program)
}

/// Everything except `false` and `null` counts as true.
pub fn is_truthy(obj: &Object) -> bool {
    !matches!(obj, Object::Boolean(false) | Object::Null)
}

fn unwrap_return_value(result: EvalResult) -> Result<Value, EvalError> {
    match result {
        Ok(val) | Err(ControlAction::Return(val)) => Ok(val),
        Err(ControlAction::Error(error)) => Err(error),
    }
}

fn apply_function(function: &Object, args: Vec<Value>) -> Result<Value, EvalError> {
    let Object::Function(function) = function else {
        return Err(EvalError::NotAFunction(function.type_name()));
    };

    if function.parameters.len() != args.len() {
        return Err(EvalError::WrongArgumentCount {
            want: function.parameters.len(),
            got: args.len(),
        });
    }

    debug!(arity = args.len(), "call");
    let extended_env = extend_function_env(function, args);
    let evaluator = Evaluator::new_with_env(extended_env.into_shared());

    unwrap_return_value(evaluator.eval_block(&function.body))
}

fn extend_function_env(function: &Function, args: Vec<Value>) -> Environment {
    let mut environment = Environment::new_enclosed_environment(Arc::clone(&function.env));

    for (param, arg) in function.parameters.iter().zip(args) {
        environment.set(param.name.as_str(), arg);
    }

    environment
}

fn eval_prefix_expression(op: Prefix, right: &Object) -> Result<Value, EvalError> {
    match op {
        Prefix::Bang => Ok(native_bool(!is_truthy(right))),
        Prefix::Minus => match right {
            Object::Integer(num) => num
                .checked_neg()
                .map(|n| Arc::new(Object::Integer(n)))
                .ok_or(EvalError::NegationOverflow(*num)),
            obj => Err(EvalError::UnknownPrefixOperator {
                operator: op,
                operand: obj.type_name(),
            }),
        },
    }
}

fn eval_infix_expression(op: Infix, left: &Value, right: &Value) -> Result<Value, EvalError> {
    match (&**left, &**right) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix_expression(op, *l, *r),
        (Object::Boolean(l), Object::Boolean(r)) => match op {
            Infix::Eq => Ok(native_bool(l == r)),
            Infix::Neq => Ok(native_bool(l != r)),
            _ => Err(unknown_infix_operator(op, left, right)),
        },
        (l, r) if l.type_name() != r.type_name() => Err(EvalError::TypeMismatch {
            left: l.type_name(),
            operator: op,
            right: r.type_name(),
        }),
        _ => Err(unknown_infix_operator(op, left, right)),
    }
}

fn unknown_infix_operator(op: Infix, left: &Object, right: &Object) -> EvalError {
    EvalError::UnknownInfixOperator {
        left: left.type_name(),
        operator: op,
        right: right.type_name(),
    }
}

// Division truncates toward zero.
fn eval_integer_infix_expression(op: Infix, left: i64, right: i64) -> Result<Value, EvalError> {
    let arithmetic = match op {
        Infix::Eq => return Ok(native_bool(left == right)),
        Infix::Neq => return Ok(native_bool(left != right)),
        Infix::Lt => return Ok(native_bool(left < right)),
        Infix::Gt => return Ok(native_bool(left > right)),
        Infix::Plus => left.checked_add(right),
        Infix::Minus => left.checked_sub(right),
        Infix::Asterisk => left.checked_mul(right),
        Infix::Slash if right == 0 => return Err(EvalError::DivisionByZero),
        Infix::Slash => left.checked_div(right),
    };

    arithmetic
        .map(|n| Arc::new(Object::Integer(n)))
        .ok_or(EvalError::IntegerOverflow {
            left,
            operator: op,
            right,
        })
}
