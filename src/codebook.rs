//! Codebook trees mapping symbols to ternary digit sequences.
//!
//! A codebook is a ternary prefix tree over the 27-symbol working alphabet
//! (A–Z plus `+`, the catch-all for every non-letter). Walking from the root
//! to a leaf spells out a symbol's digit sequence, one branch index in
//! {0, 1, 2} per level. The engine ships two codebooks:
//!
//! - a balanced depth-3 tree (3 × 3 × 3 = 27 leaves) giving every symbol a
//!   fixed 3-digit code, used by the ring codec, and
//! - a variable-depth prefix-free tree (depths 2–4) that gives the common
//!   symbols shorter codes, used by the compressing codec.
//!
//! Injected codebook files are nested lists: a branch is a list of up to
//! three nodes, a leaf is a single symbol. On load the nested form is
//! validated and compiled into an index-addressed node arena so both lookup
//! directions are O(depth), and the result is treated as immutable
//! configuration for the life of the process.

use serde::{Deserialize, Serialize};

use crate::error::{CipherError, CipherResult};

/// The 27-symbol working alphabet, in index order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ+";

/// Number of symbols in the working alphabet.
pub const ALPHABET_SIZE: usize = 27;

const STANDARD_JSON: &str = include_str!("../codebooks/standard.json");
const COMPRESSION_JSON: &str = include_str!("../codebooks/compression.json");

/// Case-fold a character and coerce anything outside A–Z to `+`.
pub fn coerce_symbol(c: char) -> char {
    let up = c.to_ascii_uppercase();
    if up.is_ascii_uppercase() {
        up
    } else {
        '+'
    }
}

/// Alphabet index of a symbol, after coercion.
pub fn symbol_index(c: char) -> usize {
    let up = coerce_symbol(c);
    if up == '+' {
        26
    } else {
        (up as u8 - b'A') as usize
    }
}

/// Symbol at a given alphabet index. Panics if `index >= 27`.
pub fn symbol_at(index: usize) -> char {
    ALPHABET.as_bytes()[index] as char
}

/// Nested-list form of a codebook tree, as stored in the injected artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeSpec {
    /// A leaf holding one symbol.
    Leaf(char),
    /// An inner node with up to three children.
    Branch(Vec<TreeSpec>),
}

/// One node of the compiled arena.
#[derive(Debug, Clone)]
enum Node {
    Branch(Vec<usize>),
    Leaf(usize),
}

/// A compiled, immutable codebook tree.
///
/// Holds the node arena plus the precomputed root-to-leaf path of every
/// symbol, so encoding is a table lookup and decoding is a walk by digit.
#[derive(Debug, Clone)]
pub struct Codebook {
    nodes: Vec<Node>,
    paths: Vec<Vec<u8>>,
}

impl Codebook {
    /// Compile a nested-list tree into an arena codebook.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidCodebook`] if the tree is not a valid
    /// ternary prefix code: a branch with fewer than 2 or more than 3
    /// children, a symbol outside the alphabet, or a symbol missing or
    /// duplicated among the leaves.
    pub fn from_spec(spec: &TreeSpec) -> CipherResult<Self> {
        let mut book = Codebook {
            nodes: Vec::new(),
            paths: vec![Vec::new(); ALPHABET_SIZE],
        };
        let mut seen = [false; ALPHABET_SIZE];
        book.build(spec, &mut Vec::new(), &mut seen)?;
        if let Some(missing) = seen.iter().position(|&s| !s) {
            return Err(CipherError::InvalidCodebook(format!(
                "symbol '{}' has no leaf",
                symbol_at(missing)
            )));
        }
        Ok(book)
    }

    /// Parse and compile a codebook from its JSON nested-list form.
    pub fn from_json_str(json: &str) -> CipherResult<Self> {
        let spec: TreeSpec = serde_json::from_str(json)
            .map_err(|e| CipherError::InvalidCodebook(e.to_string()))?;
        Self::from_spec(&spec)
    }

    /// The built-in balanced depth-3 codebook.
    pub fn standard() -> Self {
        // The embedded artifacts are fixed at compile time.
        Self::from_json_str(STANDARD_JSON).unwrap_or_else(|e| panic!("built-in codebook: {}", e))
    }

    /// The built-in variable-depth compression codebook.
    pub fn compression() -> Self {
        Self::from_json_str(COMPRESSION_JSON)
            .unwrap_or_else(|e| panic!("built-in codebook: {}", e))
    }

    fn build(
        &mut self,
        spec: &TreeSpec,
        path: &mut Vec<u8>,
        seen: &mut [bool; ALPHABET_SIZE],
    ) -> CipherResult<usize> {
        match spec {
            TreeSpec::Leaf(c) => {
                if coerce_symbol(*c) != *c {
                    return Err(CipherError::InvalidCodebook(format!(
                        "leaf '{}' is not an alphabet symbol",
                        c
                    )));
                }
                let index = symbol_index(*c);
                if seen[index] {
                    return Err(CipherError::InvalidCodebook(format!(
                        "symbol '{}' appears in more than one leaf",
                        c
                    )));
                }
                seen[index] = true;
                self.paths[index] = path.clone();
                let id = self.nodes.len();
                self.nodes.push(Node::Leaf(index));
                Ok(id)
            }
            TreeSpec::Branch(children) => {
                if children.len() < 2 || children.len() > 3 {
                    return Err(CipherError::InvalidCodebook(format!(
                        "branch with {} children (must be 2 or 3)",
                        children.len()
                    )));
                }
                let id = self.nodes.len();
                self.nodes.push(Node::Branch(Vec::new()));
                let mut child_ids = Vec::with_capacity(children.len());
                for (digit, child) in children.iter().enumerate() {
                    path.push(digit as u8);
                    child_ids.push(self.build(child, path, seen)?);
                    path.pop();
                }
                self.nodes[id] = Node::Branch(child_ids);
                Ok(id)
            }
        }
    }

    /// Digit path of a symbol, after coercion.
    pub fn path_of(&self, c: char) -> &[u8] {
        &self.paths[symbol_index(c)]
    }

    /// Encode a text into its ternary digit vector, walking the tree once
    /// per (case-folded, coerced) character and concatenating the paths in
    /// input order.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        let mut digits = Vec::with_capacity(3 * text.len());
        for c in text.chars() {
            digits.extend_from_slice(self.path_of(c));
        }
        digits
    }

    /// Decode a digit vector back to text.
    ///
    /// Repeatedly consumes digits from the front, descending by
    /// digit-as-branch-index until a leaf is reached, then restarts at the
    /// root.
    ///
    /// # Errors
    ///
    /// [`CipherError::MalformedInput`] if the digits run out mid-descent or
    /// a digit addresses a branch that does not exist.
    pub fn decode(&self, digits: &[u8]) -> CipherResult<String> {
        self.decode_stream(digits, false)
    }

    /// Decode a digit vector, optionally tolerating a trailing incomplete
    /// descent made of zero digits only.
    ///
    /// The compressing codec pads its digit stream to a multiple of 3 with
    /// zero digits; those trailing zeros descend partway into the tree
    /// without reaching a leaf and must be dropped, while a dangling descent
    /// containing a nonzero digit still signals corruption.
    pub(crate) fn decode_stream(&self, digits: &[u8], allow_zero_pad: bool) -> CipherResult<String> {
        let root = 0usize;
        let mut text = String::new();
        let mut node = root;
        let mut descent_start = 0usize;
        for (pos, &digit) in digits.iter().enumerate() {
            let children = match &self.nodes[node] {
                Node::Branch(children) => children,
                // Unreachable: a leaf always resets to the root below.
                Node::Leaf(_) => unreachable!(),
            };
            let next = children.get(digit as usize).copied().ok_or_else(|| {
                CipherError::MalformedInput(format!(
                    "digit {} at position {} addresses no branch",
                    digit, pos
                ))
            })?;
            match self.nodes[next] {
                Node::Leaf(index) => {
                    text.push(symbol_at(index));
                    node = root;
                    descent_start = pos + 1;
                }
                Node::Branch(_) => node = next,
            }
        }
        if node != root {
            let dangling = &digits[descent_start..];
            let is_pad = allow_zero_pad && dangling.iter().all(|&d| d == 0);
            if !is_pad {
                return Err(CipherError::MalformedInput(format!(
                    "{} trailing digit(s) reach no leaf",
                    dangling.len()
                )));
            }
        }
        Ok(text)
    }
}

/// Process-wide read-only cipher configuration: the two codebook trees.
///
/// Constructed once at startup and passed by reference into every component;
/// nothing in it is ever mutated, so a shared instance is safe for
/// unrestricted concurrent reads.
#[derive(Debug, Clone)]
pub struct CipherContext {
    /// Balanced depth-3 codebook used by the ring codec.
    pub standard: Codebook,
    /// Variable-depth codebook used by the compressing codec.
    pub compression: Codebook,
}

impl CipherContext {
    /// Build a context from two compiled codebooks.
    pub fn new(standard: Codebook, compression: Codebook) -> Self {
        CipherContext {
            standard,
            compression,
        }
    }

    /// The built-in codebook pair.
    pub fn builtin() -> Self {
        CipherContext {
            standard: Codebook::standard(),
            compression: Codebook::compression(),
        }
    }

    /// Build a context from the JSON nested-list forms of the two trees.
    pub fn from_json_strs(standard: &str, compression: &str) -> CipherResult<Self> {
        Ok(CipherContext {
            standard: Codebook::from_json_str(standard)?,
            compression: Codebook::from_json_str(compression)?,
        })
    }

    /// Load a context from two codebook artifact files.
    pub fn from_files(
        standard: &std::path::Path,
        compression: &std::path::Path,
    ) -> CipherResult<Self> {
        let read = |path: &std::path::Path| {
            std::fs::read_to_string(path)
                .map_err(|e| CipherError::InvalidCodebook(format!("{}: {}", path.display(), e)))
        };
        Self::from_json_strs(&read(standard)?, &read(compression)?)
    }
}

impl Default for CipherContext {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_codebooks_compile() {
        let std_book = Codebook::standard();
        let cmp_book = Codebook::compression();
        for c in ALPHABET.chars() {
            assert_eq!(std_book.path_of(c).len(), 3);
            let depth = cmp_book.path_of(c).len();
            assert!((2..=4).contains(&depth), "depth {} for '{}'", depth, c);
        }
    }

    #[test]
    fn test_standard_paths_are_alphabetical() {
        let book = Codebook::standard();
        assert_eq!(book.path_of('A'), &[0, 0, 0]);
        assert_eq!(book.path_of('C'), &[0, 0, 2]);
        assert_eq!(book.path_of('H'), &[0, 2, 1]);
        assert_eq!(book.path_of('+'), &[2, 2, 2]);
    }

    #[test]
    fn test_compression_pad_paths_are_branches() {
        // Trailing zero padding descends along [0] and [0, 0]; neither may
        // be a leaf or a padded stream would decode to a spurious symbol.
        let book = Codebook::compression();
        for c in ALPHABET.chars() {
            let path = book.path_of(c);
            assert!(path.len() > 2 || path[0] != 0, "'{}' at {:?}", c, path);
        }
    }

    #[test]
    fn test_coercion() {
        assert_eq!(coerce_symbol('a'), 'A');
        assert_eq!(coerce_symbol('Z'), 'Z');
        assert_eq!(coerce_symbol(' '), '+');
        assert_eq!(coerce_symbol('3'), '+');
        assert_eq!(symbol_index('+'), 26);
        assert_eq!(symbol_index('b'), 1);
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let book = Codebook::standard();
        let digits = book.encode("HELLO");
        assert_eq!(digits.len(), 15);
        assert_eq!(book.decode(&digits).unwrap(), "HELLO");
    }

    #[test]
    fn test_decode_rejects_dangling_digits() {
        let book = Codebook::standard();
        let mut digits = book.encode("AB");
        digits.push(1);
        assert!(matches!(
            book.decode(&digits),
            Err(CipherError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_symbol() {
        let json = r#"[["A", "B"], "A"]"#;
        assert!(matches!(
            Codebook::from_json_str(json),
            Err(CipherError::InvalidCodebook(_))
        ));
    }

    #[test]
    fn test_rejects_incomplete_alphabet() {
        let json = r#"[["A", "B"], "C"]"#;
        assert!(matches!(
            Codebook::from_json_str(json),
            Err(CipherError::InvalidCodebook(_))
        ));
    }
}
