use compact_str::CompactString;

use crate::options::ParamValues;
use crate::token::{Token, TokenKind};

/// Replacement text for each placeholder token that has a value, indexed by
/// token position. Resolved once per query so layout can render tokens in
/// any order.
pub fn resolve(tokens: &[Token], params: Option<&ParamValues>) -> Vec<Option<CompactString>> {
    let mut out = vec![None; tokens.len()];
    let Some(params) = params else {
        return out;
    };
    let mut next_positional = 0;
    for (index, token) in tokens.iter().enumerate() {
        if !token.kind.is_parameter() {
            continue;
        }
        let key = token.value.as_str();
        let bare = token.kind == TokenKind::PositionalParameter && key.is_empty();
        out[index] = match params {
            ParamValues::Positional(values) if bare => {
                next_positional += 1;
                values.get(next_positional - 1)
            }
            ParamValues::Positional(values) => key
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| values.get(i)),
            ParamValues::Named(_) if bare => None,
            ParamValues::Named(map) => map.get(key),
        }
        .map(|v| CompactString::from(v.as_str()));
    }
    out
}
