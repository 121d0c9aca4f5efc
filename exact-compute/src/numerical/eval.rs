use exact_parser::parser::{
    ast::{Binary, Call, Expr, Literal, Paren, Unary},
    token::op::{BinOpKind, UnaryOpKind},
};
use super::{
    ctxt::Ctxt,
    error::{InvalidNumber, UndefinedFunction, UndefinedVariable, WrongArgumentCount},
    func::{get_builtin, similar_builtins},
    Error,
};

/// Any type that can be evaluated to produce a real number.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    ///
    /// Arithmetic follows IEEE 754, so division by zero and out-of-domain function calls produce
    /// infinite or NaN values rather than errors.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression to produce a value, using the default context.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&Ctxt::default())
    }
}

impl Eval for Literal {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        match self {
            Literal::Number(num) => num.value.parse().map_err(|_| {
                Error::new(vec![num.span.clone()], InvalidNumber { lexeme: num.value.clone() })
            }),
            Literal::Symbol(sym) => ctxt.get_var(&sym.name).ok_or_else(|| {
                Error::new(vec![sym.span.clone()], UndefinedVariable {
                    name: sym.name.clone(),
                    suggestions: ctxt.get_similar_vars(&sym.name),
                })
            }),
        }
    }
}

impl Eval for Paren {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        self.innermost().eval(ctxt)
    }
}

impl Eval for Call {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let builtin = get_builtin(&self.name.name).ok_or_else(|| {
            Error::new(vec![self.name.span.clone()], UndefinedFunction {
                name: self.name.name.clone(),
                suggestions: similar_builtins(&self.name.name),
            })
        })?;

        if !builtin.accepts(self.args.len()) {
            return Err(Error::new(vec![self.span.clone()], WrongArgumentCount {
                name: self.name.name.clone(),
                expected: builtin.arity(),
                given: self.args.len(),
            }));
        }

        let args = self.args
            .iter()
            .map(|arg| arg.eval(ctxt))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(builtin.call(&args))
    }
}

impl Eval for Unary {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let operand = self.operand.eval(ctxt)?;
        Ok(match self.op.kind {
            UnaryOpKind::Neg => -operand,
            UnaryOpKind::Pos => operand,
        })
    }
}

impl Eval for Binary {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let left = self.lhs.eval(ctxt)?;
        let right = self.rhs.eval(ctxt)?;
        Ok(match self.op.kind {
            BinOpKind::Exp => left.powf(right),
            BinOpKind::Mul => left * right,
            BinOpKind::Div => left / right,
            BinOpKind::Add => left + right,
            BinOpKind::Sub => left - right,
        })
    }
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        match self {
            Expr::Literal(literal) => literal.eval(ctxt),
            Expr::Paren(paren) => paren.eval(ctxt),
            Expr::Call(call) => call.eval(ctxt),
            Expr::Unary(unary) => unary.eval(ctxt),
            Expr::Binary(binary) => binary.eval(ctxt),
        }
    }
}
