//! Rhai implementation of [`ScriptScanner`].
//!
//! Compiles the script without optimization and walks its main body in
//! pre-order, collecting the literal prompt of every `input("...")` call.
//! A call to a script-defined function is followed into that function's
//! body after its arguments, so prompts come out in the order straight-line
//! code asks them. Functions never called from walked code are scanned last,
//! in definition order.

use std::collections::{HashMap, HashSet};

use rhai::{ASTNode, Expr, FnCallExpr, Position, Stmt, StmtBlock, AST};
use scriptform_core::script::scanner::{ScannedScript, ScriptScanner};
use scriptform_types::error::SourceSyntaxError;

use crate::script::doc::leading_doc_block;
use crate::script::{compile_verbatim, strip_shebang, INPUT_FN};

/// Static scanner for Rhai scripts.
#[derive(Debug, Clone, Copy, Default)]
pub struct RhaiScanner;

impl RhaiScanner {
    pub fn new() -> Self {
        Self
    }
}

impl ScriptScanner for RhaiScanner {
    fn scan(&self, source: &str) -> Result<ScannedScript, SourceSyntaxError> {
        let ast = compile_verbatim(&strip_shebang(source))?;

        let mut walker = CallSiteWalker::new(&ast);
        walker.walk_block(ast.statements());
        walker.walk_unreached();
        let prompts = walker.prompts;

        tracing::debug!(prompts = prompts.len(), "scanned script");

        Ok(ScannedScript {
            doc: leading_doc_block(source),
            prompts,
        })
    }
}

/// Script functions are keyed by name and arity, as Rhai resolves them.
type FnKey = (String, usize);

/// A call site of interest found in one statement.
enum Site {
    Prompt(String),
    Unrecognized { line: Option<usize>, args: usize },
    ScriptCall(FnKey),
}

struct CallSiteWalker<'a> {
    functions: HashMap<FnKey, &'a StmtBlock>,
    reached: HashSet<FnKey>,
    /// Functions currently being walked, to stop at recursion.
    active: Vec<FnKey>,
    prompts: Vec<String>,
}

impl<'a> CallSiteWalker<'a> {
    fn new(ast: &'a AST) -> Self {
        let functions = ast
            .iter_fn_def()
            .map(|f| ((f.name.to_string(), f.params.len()), &f.body))
            .collect();

        Self {
            functions,
            reached: HashSet::new(),
            active: Vec::new(),
            prompts: Vec::new(),
        }
    }

    fn walk_block(&mut self, statements: &'a [Stmt]) {
        for stmt in statements {
            self.walk_stmt(stmt);
        }
    }

    fn walk_stmt(&mut self, stmt: &'a Stmt) {
        let mut sites = Vec::new();
        let functions = &self.functions;

        stmt.walk(&mut Vec::new(), &mut |path: &[ASTNode]| {
            let (call, pos) = match path.last() {
                Some(ASTNode::Expr(Expr::FnCall(call, pos))) => (call, *pos),
                Some(ASTNode::Stmt(Stmt::FnCall(call, pos))) => (call, *pos),
                _ => return true,
            };
            if let Some(site) = classify(call, pos, functions) {
                sites.push((path.len(), site));
            }
            true
        });

        self.visit_sites(sites);
    }

    /// Sites arrive in pre-order with their tree depth. A script call is
    /// held back until every site nested under it (its arguments) is done.
    fn visit_sites(&mut self, sites: Vec<(usize, Site)>) {
        let mut pending: Vec<(usize, FnKey)> = Vec::new();

        for (depth, site) in sites {
            while let Some((pending_depth, _)) = pending.last() {
                if *pending_depth < depth {
                    break;
                }
                if let Some((_, key)) = pending.pop() {
                    self.descend(key);
                }
            }

            match site {
                Site::Prompt(prompt) => self.prompts.push(prompt),
                Site::Unrecognized { line, args } => tracing::debug!(
                    line,
                    args,
                    "skipping input call without a single literal prompt"
                ),
                Site::ScriptCall(key) => pending.push((depth, key)),
            }
        }

        while let Some((_, key)) = pending.pop() {
            self.descend(key);
        }
    }

    fn descend(&mut self, key: FnKey) {
        if self.active.contains(&key) {
            tracing::debug!(function = %key.0, "not following recursive call");
            return;
        }
        let Some(body) = self.functions.get(&key).copied() else {
            return;
        };

        self.reached.insert(key.clone());
        self.active.push(key);
        self.walk_block(body.statements());
        self.active.pop();
    }

    fn walk_unreached(&mut self) {
        let mut unreached: Vec<(FnKey, &'a StmtBlock)> = self
            .functions
            .iter()
            .filter(|(key, _)| !self.reached.contains(*key))
            .map(|(key, body)| (key.clone(), *body))
            .collect();
        unreached.sort_by_key(|(_, body)| {
            let pos = body.position();
            (pos.line(), pos.position())
        });

        for (key, _) in unreached {
            // An earlier unreached function may have called this one.
            if !self.reached.contains(&key) {
                self.descend(key);
            }
        }
    }
}

fn classify(
    call: &FnCallExpr,
    pos: Position,
    functions: &HashMap<FnKey, &StmtBlock>,
) -> Option<Site> {
    if call.is_qualified() {
        return None;
    }

    let name = call.name.as_str();
    if name == INPUT_FN {
        return Some(match &call.args[..] {
            [Expr::StringConstant(prompt, _)] => Site::Prompt(prompt.to_string()),
            args => Site::Unrecognized {
                line: pos.line(),
                args: args.len(),
            },
        });
    }

    let key = (name.to_string(), call.args.len());
    functions
        .contains_key(&key)
        .then_some(Site::ScriptCall(key))
}
