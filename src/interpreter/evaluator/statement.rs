use std::io::Write;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl<W: Write> Context<W> {
    /// Evaluates a single statement.
    ///
    /// An assignment checks that its target is declared before evaluating the
    /// right-hand side. An output statement writes the value in decimal,
    /// followed by a newline if requested, and flushes immediately so output
    /// appears in program order.
    ///
    /// # Errors
    /// - `UnboundIdentifier` if the assignment target was never declared.
    /// - `Output` if writing to the sink fails.
    /// - Propagates any error from expression evaluation.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Assignment { name, value, line } => {
                if self.get_variable(name).is_none() {
                    return Err(RuntimeError::UnboundIdentifier { name: name.clone(),
                                                                 line: *line, });
                }

                let value = self.eval(value)?;
                self.assign(name, value, *line)
            },
            Statement::Output { value,
                                newline,
                                line, } => self.eval_output(value, *newline, *line),
        }
    }

    fn eval_output(&mut self, value: &Expr, newline: bool, line: usize) -> EvalResult<()> {
        let value = self.eval(value)?;

        let mut text = value.to_string();
        if newline {
            text.push('\n');
        }

        let output = self.output_mut();
        output.write_all(text.as_bytes())
              .and_then(|()| output.flush())
              .map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                  line })
    }
}
