//! Python parser collaborator.
//!
//! Lowers a `rustpython_parser` module tree into the closed [`SyntaxNode`]
//! shape the scanner consumes. Only the five kinds the scanner counts are
//! distinguished; every other construct becomes an `Other` node whose
//! children remain reachable, so nothing inside an `if`, `try`, or
//! comprehension escapes the traversal.

use crate::core::{ScanError, SyntaxNode};
use rustpython_parser::{ast, Mode};

/// Parse Python source text into a scannable syntax tree.
///
/// The returned root is an `Other` node holding the module body, so a
/// snippet with several top-level statements scans like any other subtree.
pub fn parse_module(source: &str) -> Result<SyntaxNode, ScanError> {
    let parsed = rustpython_parser::parse(source, Mode::Module, "<module>")
        .map_err(|e| ScanError::parse_failure(e.to_string()))?;

    let ast::Mod::Module(module) = parsed else {
        return Err(ScanError::parse_failure("expected a module"));
    };

    let mut children = Vec::with_capacity(module.body.len());
    lower_stmts(&module.body, &mut children);
    Ok(SyntaxNode::Other { children })
}

fn lower_stmts(stmts: &[ast::Stmt], out: &mut Vec<SyntaxNode>) {
    for stmt in stmts {
        lower_stmt(stmt, out);
    }
}

fn lower_stmt(stmt: &ast::Stmt, out: &mut Vec<SyntaxNode>) {
    match stmt {
        ast::Stmt::FunctionDef(def) => {
            out.push(lower_function(&def.name, &def.decorator_list, &def.body));
        }
        ast::Stmt::AsyncFunctionDef(def) => {
            out.push(lower_function(&def.name, &def.decorator_list, &def.body));
        }
        ast::Stmt::For(s) => {
            let mut body = Vec::new();
            lower_expr(&s.target, &mut body);
            lower_expr(&s.iter, &mut body);
            lower_stmts(&s.body, &mut body);
            lower_stmts(&s.orelse, &mut body);
            out.push(SyntaxNode::Loop { body });
        }
        ast::Stmt::AsyncFor(s) => {
            let mut body = Vec::new();
            lower_expr(&s.target, &mut body);
            lower_expr(&s.iter, &mut body);
            lower_stmts(&s.body, &mut body);
            lower_stmts(&s.orelse, &mut body);
            out.push(SyntaxNode::Loop { body });
        }
        ast::Stmt::While(s) => {
            let mut body = Vec::new();
            lower_expr(&s.test, &mut body);
            lower_stmts(&s.body, &mut body);
            lower_stmts(&s.orelse, &mut body);
            out.push(SyntaxNode::Loop { body });
        }
        ast::Stmt::Assign(s) => {
            let mut operands = Vec::new();
            for target in &s.targets {
                lower_expr(target, &mut operands);
            }
            lower_expr(&s.value, &mut operands);
            out.push(SyntaxNode::Assignment { operands });
        }
        // Augmented and annotated assignments are not counted as plain
        // assignments; their operands are still traversed.
        ast::Stmt::AugAssign(s) => {
            let mut children = Vec::new();
            lower_expr(&s.target, &mut children);
            lower_expr(&s.value, &mut children);
            push_other(children, out);
        }
        ast::Stmt::AnnAssign(s) => {
            let mut children = Vec::new();
            lower_expr(&s.target, &mut children);
            lower_expr(&s.annotation, &mut children);
            if let Some(value) = &s.value {
                lower_expr(value, &mut children);
            }
            push_other(children, out);
        }
        ast::Stmt::ClassDef(s) => {
            let mut children = Vec::new();
            for decorator in &s.decorator_list {
                lower_expr(decorator, &mut children);
            }
            for base in &s.bases {
                lower_expr(base, &mut children);
            }
            for keyword in &s.keywords {
                lower_expr(&keyword.value, &mut children);
            }
            lower_stmts(&s.body, &mut children);
            push_other(children, out);
        }
        ast::Stmt::If(s) => {
            let mut children = Vec::new();
            lower_expr(&s.test, &mut children);
            lower_stmts(&s.body, &mut children);
            lower_stmts(&s.orelse, &mut children);
            push_other(children, out);
        }
        ast::Stmt::With(s) => {
            let mut children = Vec::new();
            for item in &s.items {
                lower_expr(&item.context_expr, &mut children);
                if let Some(vars) = &item.optional_vars {
                    lower_expr(vars, &mut children);
                }
            }
            lower_stmts(&s.body, &mut children);
            push_other(children, out);
        }
        ast::Stmt::AsyncWith(s) => {
            let mut children = Vec::new();
            for item in &s.items {
                lower_expr(&item.context_expr, &mut children);
                if let Some(vars) = &item.optional_vars {
                    lower_expr(vars, &mut children);
                }
            }
            lower_stmts(&s.body, &mut children);
            push_other(children, out);
        }
        ast::Stmt::Match(s) => {
            let mut children = Vec::new();
            lower_expr(&s.subject, &mut children);
            for case in &s.cases {
                if let Some(guard) = &case.guard {
                    lower_expr(guard, &mut children);
                }
                lower_stmts(&case.body, &mut children);
            }
            push_other(children, out);
        }
        ast::Stmt::Try(s) => {
            let mut children = Vec::new();
            lower_stmts(&s.body, &mut children);
            for handler in &s.handlers {
                match handler {
                    ast::ExceptHandler::ExceptHandler(h) => {
                        if let Some(type_) = &h.type_ {
                            lower_expr(type_, &mut children);
                        }
                        lower_stmts(&h.body, &mut children);
                    }
                }
            }
            lower_stmts(&s.orelse, &mut children);
            lower_stmts(&s.finalbody, &mut children);
            push_other(children, out);
        }
        ast::Stmt::Return(s) => {
            let mut children = Vec::new();
            if let Some(value) = &s.value {
                lower_expr(value, &mut children);
            }
            push_other(children, out);
        }
        ast::Stmt::Raise(s) => {
            let mut children = Vec::new();
            if let Some(exc) = &s.exc {
                lower_expr(exc, &mut children);
            }
            if let Some(cause) = &s.cause {
                lower_expr(cause, &mut children);
            }
            push_other(children, out);
        }
        ast::Stmt::Assert(s) => {
            let mut children = Vec::new();
            lower_expr(&s.test, &mut children);
            if let Some(msg) = &s.msg {
                lower_expr(msg, &mut children);
            }
            push_other(children, out);
        }
        ast::Stmt::Delete(s) => {
            let mut children = Vec::new();
            for target in &s.targets {
                lower_expr(target, &mut children);
            }
            push_other(children, out);
        }
        ast::Stmt::Expr(s) => lower_expr(&s.value, out),
        // Imports, scope declarations, and bare keywords carry nothing the
        // scanner counts.
        _ => {}
    }
}

fn lower_function(
    name: &ast::Identifier,
    decorators: &[ast::Expr],
    body: &[ast::Stmt],
) -> SyntaxNode {
    let mut children = Vec::new();
    for decorator in decorators {
        lower_expr(decorator, &mut children);
    }
    lower_stmts(body, &mut children);
    SyntaxNode::FunctionDef {
        name: name.to_string(),
        body: children,
    }
}

fn lower_expr(expr: &ast::Expr, out: &mut Vec<SyntaxNode>) {
    match expr {
        ast::Expr::Call(call) => {
            let mut args = Vec::new();
            lower_expr(&call.func, &mut args);
            for arg in &call.args {
                lower_expr(arg, &mut args);
            }
            for keyword in &call.keywords {
                lower_expr(&keyword.value, &mut args);
            }
            out.push(SyntaxNode::Call {
                callee: callee_name(&call.func),
                args,
            });
        }
        ast::Expr::BinOp(binop) => {
            let mut operands = Vec::new();
            lower_expr(&binop.left, &mut operands);
            lower_expr(&binop.right, &mut operands);
            out.push(SyntaxNode::BinaryOp { operands });
        }
        ast::Expr::BoolOp(e) => {
            let mut children = Vec::new();
            for value in &e.values {
                lower_expr(value, &mut children);
            }
            push_other(children, out);
        }
        ast::Expr::NamedExpr(e) => {
            let mut children = Vec::new();
            lower_expr(&e.target, &mut children);
            lower_expr(&e.value, &mut children);
            push_other(children, out);
        }
        ast::Expr::UnaryOp(e) => {
            let mut children = Vec::new();
            lower_expr(&e.operand, &mut children);
            push_other(children, out);
        }
        ast::Expr::Lambda(e) => {
            let mut children = Vec::new();
            lower_expr(&e.body, &mut children);
            push_other(children, out);
        }
        ast::Expr::IfExp(e) => {
            let mut children = Vec::new();
            lower_expr(&e.test, &mut children);
            lower_expr(&e.body, &mut children);
            lower_expr(&e.orelse, &mut children);
            push_other(children, out);
        }
        ast::Expr::Dict(e) => {
            let mut children = Vec::new();
            for key in e.keys.iter().flatten() {
                lower_expr(key, &mut children);
            }
            for value in &e.values {
                lower_expr(value, &mut children);
            }
            push_other(children, out);
        }
        ast::Expr::Set(e) => {
            let mut children = Vec::new();
            for elt in &e.elts {
                lower_expr(elt, &mut children);
            }
            push_other(children, out);
        }
        ast::Expr::ListComp(e) => {
            let mut children = Vec::new();
            lower_expr(&e.elt, &mut children);
            lower_generators(&e.generators, &mut children);
            push_other(children, out);
        }
        ast::Expr::SetComp(e) => {
            let mut children = Vec::new();
            lower_expr(&e.elt, &mut children);
            lower_generators(&e.generators, &mut children);
            push_other(children, out);
        }
        ast::Expr::DictComp(e) => {
            let mut children = Vec::new();
            lower_expr(&e.key, &mut children);
            lower_expr(&e.value, &mut children);
            lower_generators(&e.generators, &mut children);
            push_other(children, out);
        }
        ast::Expr::GeneratorExp(e) => {
            let mut children = Vec::new();
            lower_expr(&e.elt, &mut children);
            lower_generators(&e.generators, &mut children);
            push_other(children, out);
        }
        ast::Expr::Await(e) => lower_expr(&e.value, out),
        ast::Expr::Yield(e) => {
            if let Some(value) = &e.value {
                lower_expr(value, out);
            }
        }
        ast::Expr::YieldFrom(e) => lower_expr(&e.value, out),
        ast::Expr::Compare(e) => {
            let mut children = Vec::new();
            lower_expr(&e.left, &mut children);
            for comparator in &e.comparators {
                lower_expr(comparator, &mut children);
            }
            push_other(children, out);
        }
        ast::Expr::FormattedValue(e) => {
            let mut children = Vec::new();
            lower_expr(&e.value, &mut children);
            if let Some(format_spec) = &e.format_spec {
                lower_expr(format_spec, &mut children);
            }
            push_other(children, out);
        }
        ast::Expr::JoinedStr(e) => {
            let mut children = Vec::new();
            for value in &e.values {
                lower_expr(value, &mut children);
            }
            push_other(children, out);
        }
        ast::Expr::Attribute(e) => lower_expr(&e.value, out),
        ast::Expr::Subscript(e) => {
            let mut children = Vec::new();
            lower_expr(&e.value, &mut children);
            lower_expr(&e.slice, &mut children);
            push_other(children, out);
        }
        ast::Expr::Starred(e) => lower_expr(&e.value, out),
        ast::Expr::List(e) => {
            let mut children = Vec::new();
            for elt in &e.elts {
                lower_expr(elt, &mut children);
            }
            push_other(children, out);
        }
        ast::Expr::Tuple(e) => {
            let mut children = Vec::new();
            for elt in &e.elts {
                lower_expr(elt, &mut children);
            }
            push_other(children, out);
        }
        ast::Expr::Slice(e) => {
            let mut children = Vec::new();
            if let Some(lower) = &e.lower {
                lower_expr(lower, &mut children);
            }
            if let Some(upper) = &e.upper {
                lower_expr(upper, &mut children);
            }
            if let Some(step) = &e.step {
                lower_expr(step, &mut children);
            }
            push_other(children, out);
        }
        // Names and constants carry no children.
        _ => {}
    }
}

fn lower_generators(generators: &[ast::Comprehension], out: &mut Vec<SyntaxNode>) {
    for generator in generators {
        lower_expr(&generator.target, out);
        lower_expr(&generator.iter, out);
        for if_clause in &generator.ifs {
            lower_expr(if_clause, out);
        }
    }
}

fn callee_name(func: &ast::Expr) -> Option<String> {
    match func {
        ast::Expr::Name(name) => Some(name.id.to_string()),
        _ => None,
    }
}

fn push_other(children: Vec<SyntaxNode>, out: &mut Vec<SyntaxNode>) {
    if !children.is_empty() {
        out.push(SyntaxNode::Other { children });
    }
}
