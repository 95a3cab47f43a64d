//! Reader for settings authored as a JS/TS module exporting a plain object
//!
//! The module is parsed with tree-sitter. Exactly one `module.exports = ...`
//! or `export default ...` statement must export an object literal built from
//! objects, arrays, strings, numbers, booleans and `null`. TypeScript modules
//! may wrap the literal in `satisfies`/`as`. Anything else is rejected with
//! its position.

use serde_json::{Map, Number, Value};
use thiserror::Error;
use tree_sitter::{Language, Node, Parser};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}, column {column}: {message}")]
pub struct JsParseError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleDialect {
    JavaScript,
    TypeScript,
}

impl ModuleDialect {
    fn language(self) -> Language {
        match self {
            ModuleDialect::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            ModuleDialect::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        }
    }
}

pub fn parse_js_module(source: &str) -> Result<Value, JsParseError> {
    parse_module(source, ModuleDialect::JavaScript)
}

pub fn parse_module(source: &str, dialect: ModuleDialect) -> Result<Value, JsParseError> {
    let mut parser = Parser::new();
    parser.set_language(&dialect.language()).map_err(|e| JsParseError {
        line: 1,
        column: 1,
        message: format!("failed loading grammar: {}", e),
    })?;
    let tree = parser.parse(source, None).ok_or_else(|| JsParseError {
        line: 1,
        column: 1,
        message: "parser produced no tree".to_string(),
    })?;
    let root = tree.root_node();

    if let Some(bad) = first_syntax_error(root) {
        let message = if bad.is_missing() {
            format!("missing `{}`", bad.kind())
        } else {
            "syntax error".to_string()
        };
        return Err(error_at(bad, message));
    }

    let reader = LiteralReader { source: source.as_bytes() };
    let mut exported = None;
    let mut cursor = root.walk();
    for statement in root.named_children(&mut cursor) {
        if statement.kind() == "comment" || is_type_import(statement, source.as_bytes()) {
            continue;
        }
        let Some(value_node) = exported_value(statement, source.as_bytes()) else {
            return Err(error_at(
                statement,
                format!("unsupported statement `{}`", reader.snippet(statement)),
            ));
        };
        if exported.is_some() {
            return Err(error_at(statement, "module exports more than once".to_string()));
        }
        exported = Some(value_node);
    }

    let Some(value_node) = exported else {
        return Err(JsParseError {
            line: 1,
            column: 1,
            message: "expected `module.exports =` or `export default`".to_string(),
        });
    };
    reader.value(value_node)
}

/// The exported expression of `module.exports = <expr>` or `export default <expr>`.
fn exported_value<'t>(statement: Node<'t>, source: &[u8]) -> Option<Node<'t>> {
    match statement.kind() {
        "export_statement" => statement.child_by_field_name("value"),
        "expression_statement" => {
            let assignment = statement.named_child(0)?;
            if assignment.kind() != "assignment_expression" {
                return None;
            }
            let left = assignment.child_by_field_name("left")?;
            let object = left.child_by_field_name("object")?;
            let property = left.child_by_field_name("property")?;
            let is_module_exports = left.kind() == "member_expression"
                && object.utf8_text(source).ok()? == "module"
                && property.utf8_text(source).ok()? == "exports";
            is_module_exports.then(|| assignment.child_by_field_name("right")).flatten()
        }
        _ => None,
    }
}

/// `import type ...` brings in no values, so it is allowed alongside the export.
fn is_type_import(statement: Node<'_>, source: &[u8]) -> bool {
    statement.kind() == "import_statement"
        && statement
            .utf8_text(source)
            .map(|text| text.strip_prefix("import").unwrap_or("").trim_start().starts_with("type "))
            .unwrap_or(false)
}

fn first_syntax_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_syntax_error)
}

fn error_at(node: Node<'_>, message: String) -> JsParseError {
    let position = node.start_position();
    JsParseError { line: position.row + 1, column: position.column + 1, message }
}

struct LiteralReader<'s> {
    source: &'s [u8],
}

impl LiteralReader<'_> {
    fn text(&self, node: Node<'_>) -> Result<&str, JsParseError> {
        node.utf8_text(self.source)
            .map_err(|_| error_at(node, "invalid UTF-8 in source".to_string()))
    }

    fn snippet(&self, node: Node<'_>) -> String {
        let text = node.utf8_text(self.source).unwrap_or("");
        let first_line = text.lines().next().unwrap_or("");
        if first_line.chars().count() > 40 {
            format!("{}...", first_line.chars().take(40).collect::<String>())
        } else {
            first_line.to_string()
        }
    }

    fn unsupported(&self, node: Node<'_>) -> JsParseError {
        error_at(node, format!("unsupported {} `{}`", node.kind(), self.snippet(node)))
    }

    fn value(&self, node: Node<'_>) -> Result<Value, JsParseError> {
        match node.kind() {
            "object" => self.object(node),
            "array" => self.array(node),
            "string" | "template_string" => Ok(Value::String(self.string(node)?)),
            "number" => Ok(Value::Number(self.number(node, false)?)),
            "unary_expression" => self.signed_number(node),
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "null" => Ok(Value::Null),
            // Type-level wrappers carry no value of their own.
            "parenthesized_expression" | "satisfies_expression" | "as_expression"
            | "non_null_expression" => {
                let inner = node.named_child(0).ok_or_else(|| self.unsupported(node))?;
                self.value(inner)
            }
            _ => Err(self.unsupported(node)),
        }
    }

    fn object(&self, node: Node<'_>) -> Result<Value, JsParseError> {
        let mut map = Map::new();
        let mut cursor = node.walk();
        for member in node.named_children(&mut cursor) {
            match member.kind() {
                "comment" => continue,
                "pair" => {
                    let key_node =
                        member.child_by_field_name("key").ok_or_else(|| self.unsupported(member))?;
                    let value_node = member
                        .child_by_field_name("value")
                        .ok_or_else(|| self.unsupported(member))?;
                    map.insert(self.key(key_node)?, self.value(value_node)?);
                }
                _ => return Err(self.unsupported(member)),
            }
        }
        Ok(Value::Object(map))
    }

    fn key(&self, node: Node<'_>) -> Result<String, JsParseError> {
        match node.kind() {
            "property_identifier" => Ok(self.text(node)?.to_string()),
            "string" => self.string(node),
            // JS stringifies numeric keys: `1e3` names the key "1000".
            "number" => Ok(self.number(node, false)?.to_string()),
            _ => Err(self.unsupported(node)),
        }
    }

    fn array(&self, node: Node<'_>) -> Result<Value, JsParseError> {
        let mut cursor = node.walk();
        node.named_children(&mut cursor)
            .filter(|item| item.kind() != "comment")
            .map(|item| self.value(item))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }

    fn string(&self, node: Node<'_>) -> Result<String, JsParseError> {
        let mut cursor = node.walk();
        if node.named_children(&mut cursor).any(|c| c.kind() == "template_substitution") {
            return Err(error_at(node, "template substitutions are not supported".to_string()));
        }
        let text = self.text(node)?;
        let body = text
            .get(1..text.len().saturating_sub(1))
            .ok_or_else(|| error_at(node, "malformed string literal".to_string()))?;
        decode_string(body).ok_or_else(|| error_at(node, "invalid escape in string".to_string()))
    }

    fn signed_number(&self, node: Node<'_>) -> Result<Value, JsParseError> {
        let operator = node.child_by_field_name("operator").ok_or_else(|| self.unsupported(node))?;
        let argument = node.child_by_field_name("argument").ok_or_else(|| self.unsupported(node))?;
        if argument.kind() != "number" {
            return Err(self.unsupported(node));
        }
        let negative = match self.text(operator)? {
            "-" => true,
            "+" => false,
            _ => return Err(self.unsupported(node)),
        };
        Ok(Value::Number(self.number(argument, negative)?))
    }

    fn number(&self, node: Node<'_>, negative: bool) -> Result<Number, JsParseError> {
        let text = self.text(node)?;
        parse_number(text, negative)
            .ok_or_else(|| error_at(node, format!("unsupported number `{}`", text)))
    }
}

/// JS numeric literal to a JSON number. Integral values become integers.
fn parse_number(text: &str, negative: bool) -> Option<Number> {
    let cleaned: String = text.chars().filter(|c| *c != '_').collect::<String>().to_ascii_lowercase();
    if cleaned.ends_with('n') {
        return None;
    }
    let radix = match cleaned.get(..2) {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    let sign = if negative { -1 } else { 1 };
    if let Some(radix) = radix {
        return i64::from_str_radix(&cleaned[2..], radix).ok().map(|n| Number::from(sign * n));
    }
    if let Ok(int) = cleaned.parse::<i64>() {
        return Some(Number::from(sign * int));
    }
    let float = cleaned.parse::<f64>().ok()? * sign as f64;
    if float.fract() == 0.0 && float.abs() < 9_007_199_254_740_992.0 {
        return Some(Number::from(float as i64));
    }
    Number::from_f64(float)
}

/// Decode the body of a quoted JS string. Works on UTF-16 units so escaped
/// surrogate pairs (`\uD83D\uDE00`) combine; a lone surrogate is rejected.
fn decode_string(body: &str) -> Option<String> {
    let mut units: Vec<u16> = Vec::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    let mut buf = [0u16; 2];

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            units.extend_from_slice(ch.encode_utf16(&mut buf));
            continue;
        }
        let escaped = chars.next()?;
        let decoded = match escaped {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            'b' => '\u{8}',
            'f' => '\u{c}',
            'v' => '\u{b}',
            '0' => '\0',
            'x' => {
                let hex: String = chars.by_ref().take(2).collect();
                units.push(u16::from_str_radix(&hex, 16).ok().filter(|_| hex.len() == 2)?);
                continue;
            }
            'u' if chars.peek() == Some(&'{') => {
                chars.next();
                let hex: String = chars.by_ref().take_while(|c| *c != '}').collect();
                char::from_u32(u32::from_str_radix(&hex, 16).ok()?)?
            }
            'u' => {
                let hex: String = chars.by_ref().take(4).collect();
                units.push(u16::from_str_radix(&hex, 16).ok().filter(|_| hex.len() == 4)?);
                continue;
            }
            // Line continuation.
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                continue;
            }
            '\n' | '\u{2028}' | '\u{2029}' => continue,
            other => other,
        };
        units.extend_from_slice(decoded.encode_utf16(&mut buf));
    }
    String::from_utf16(&units).ok()
}
