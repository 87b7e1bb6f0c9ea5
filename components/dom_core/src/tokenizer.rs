//! HTML tokenizer state machine (C2).
//!
//! A simplified version of the HTML5 tokenizer states relevant to this
//! workspace's Non-goals (no DOCTYPE, no CDATA, no script/RCDATA
//! switching, no character-reference decoding — matching the decided
//! open question that entities are never decoded in either direction).
//! Attribute and tag names are canonicalized through
//! [`crate::interner`] as they're emitted, so the tree builder never
//! sees raw-case input.

use crate::interner::{canon_attr, canon_tag};
use dom_types::DomError;
use smallvec::SmallVec;

/// One attribute as tokenized, before interning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAttr {
    pub name: String,
    pub value: String,
}

/// A single tokenizer output unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    StartTag {
        name: String,
        attrs: Vec<RawAttr>,
        self_closing: bool,
    },
    EndTag {
        name: String,
    },
    Text(String),
    Comment(String),
    Eof,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Data,
    TagOpen,
    EndTagOpen,
    TagName,
    EndTagName,
    BeforeAttrName,
    AttrName,
    BeforeAttrValue,
    AttrValueDoubleQuoted,
    AttrValueSingleQuoted,
    AttrValueUnquoted,
    AfterAttrValue,
    SelfClosingStart,
    MarkupDeclarationOpen,
    CommentStart,
    Comment,
}

/// Tokenizes `input` into a flat token stream, consumed in order by the
/// tree builder.
pub struct Tokenizer<'a> {
    input: Vec<char>,
    pos: usize,
    state: State,
    text_buf: String,
    _phantom: std::marker::PhantomData<&'a str>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
            state: State::Data,
            text_buf: String::new(),
            _phantom: std::marker::PhantomData,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn rest_starts_with(&self, needle: &str) -> bool {
        let needle_chars: Vec<char> = needle.chars().collect();
        if self.pos + needle_chars.len() > self.input.len() {
            return false;
        }
        self.input[self.pos..self.pos + needle_chars.len()] == needle_chars[..]
    }

    fn flush_text(&mut self, out: &mut Vec<Token>) {
        if !self.text_buf.is_empty() {
            out.push(Token::Text(std::mem::take(&mut self.text_buf)));
        }
    }

    /// Tokenizes the entire input in one pass (the parser's input is
    /// always fully buffered; there is no streaming/incremental mode).
    pub fn tokenize_all(mut self) -> Result<Vec<Token>, DomError> {
        let mut out = Vec::new();
        let mut tag_name_buf = String::new();
        let mut attrs: Vec<RawAttr> = Vec::new();
        let mut attr_name_buf = String::new();
        let mut attr_value_buf = String::new();
        let mut self_closing = false;
        let mut is_end_tag = false;
        let mut comment_buf = String::new();

        loop {
            match self.state {
                State::Data => match self.advance() {
                    None => {
                        self.flush_text(&mut out);
                        out.push(Token::Eof);
                        break;
                    }
                    Some('<') => {
                        self.flush_text(&mut out);
                        self.state = State::TagOpen;
                    }
                    Some(c) => self.text_buf.push(c),
                },
                State::TagOpen => match self.peek() {
                    Some('/') => {
                        self.pos += 1;
                        self.state = State::EndTagOpen;
                    }
                    Some(c) if c.is_ascii_alphabetic() => {
                        tag_name_buf.clear();
                        attrs.clear();
                        self_closing = false;
                        is_end_tag = false;
                        self.state = State::TagName;
                    }
                    Some('!') => {
                        self.pos += 1;
                        self.state = State::MarkupDeclarationOpen;
                    }
                    _ => {
                        // Not actually a tag; treat '<' as literal text.
                        self.text_buf.push('<');
                        self.state = State::Data;
                    }
                },
                State::EndTagOpen => {
                    tag_name_buf.clear();
                    is_end_tag = true;
                    self.state = State::EndTagName;
                }
                State::TagName => match self.advance() {
                    Some(c) if c.is_ascii_whitespace() => self.state = State::BeforeAttrName,
                    Some('/') => self.state = State::SelfClosingStart,
                    Some('>') => {
                        out.push(Token::StartTag {
                            name: canon_tag(&tag_name_buf),
                            attrs: std::mem::take(&mut attrs),
                            self_closing: false,
                        });
                        self.state = State::Data;
                    }
                    Some(c) => tag_name_buf.push(c),
                    None => {
                        out.push(Token::Eof);
                        break;
                    }
                },
                State::EndTagName => match self.advance() {
                    Some('>') => {
                        out.push(Token::EndTag {
                            name: canon_tag(&tag_name_buf),
                        });
                        self.state = State::Data;
                    }
                    Some(c) => tag_name_buf.push(c),
                    None => {
                        out.push(Token::Eof);
                        break;
                    }
                },
                State::BeforeAttrName => match self.peek() {
                    Some(c) if c.is_ascii_whitespace() => {
                        self.pos += 1;
                    }
                    Some('/') => {
                        self.pos += 1;
                        self.state = State::SelfClosingStart;
                    }
                    Some('>') => {
                        self.pos += 1;
                        emit_start_tag(&mut out, &tag_name_buf, &mut attrs, false, is_end_tag);
                        self.state = State::Data;
                    }
                    Some(_) => {
                        attr_name_buf.clear();
                        self.state = State::AttrName;
                    }
                    None => {
                        out.push(Token::Eof);
                        break;
                    }
                },
                State::AttrName => match self.peek() {
                    Some(c) if c.is_ascii_whitespace() => {
                        self.pos += 1;
                        attrs.push(RawAttr {
                            name: canon_attr(&attr_name_buf),
                            value: String::new(),
                        });
                        self.state = State::BeforeAttrName;
                    }
                    Some('=') => {
                        self.pos += 1;
                        self.state = State::BeforeAttrValue;
                    }
                    Some('/') => {
                        self.pos += 1;
                        attrs.push(RawAttr {
                            name: canon_attr(&attr_name_buf),
                            value: String::new(),
                        });
                        self.state = State::SelfClosingStart;
                    }
                    Some('>') => {
                        self.pos += 1;
                        attrs.push(RawAttr {
                            name: canon_attr(&attr_name_buf),
                            value: String::new(),
                        });
                        emit_start_tag(&mut out, &tag_name_buf, &mut attrs, false, is_end_tag);
                        self.state = State::Data;
                    }
                    Some(c) => {
                        self.pos += 1;
                        attr_name_buf.push(c);
                    }
                    None => {
                        out.push(Token::Eof);
                        break;
                    }
                },
                State::BeforeAttrValue => match self.peek() {
                    Some(c) if c.is_ascii_whitespace() => {
                        self.pos += 1;
                    }
                    Some('"') => {
                        self.pos += 1;
                        attr_value_buf.clear();
                        self.state = State::AttrValueDoubleQuoted;
                    }
                    Some('\'') => {
                        self.pos += 1;
                        attr_value_buf.clear();
                        self.state = State::AttrValueSingleQuoted;
                    }
                    Some(_) => {
                        attr_value_buf.clear();
                        self.state = State::AttrValueUnquoted;
                    }
                    None => {
                        out.push(Token::Eof);
                        break;
                    }
                },
                State::AttrValueDoubleQuoted => match self.advance() {
                    Some('"') => {
                        attrs.push(RawAttr {
                            name: canon_attr(&attr_name_buf),
                            value: std::mem::take(&mut attr_value_buf),
                        });
                        self.state = State::AfterAttrValue;
                    }
                    Some(c) => attr_value_buf.push(c),
                    None => {
                        out.push(Token::Eof);
                        break;
                    }
                },
                State::AttrValueSingleQuoted => match self.advance() {
                    Some('\'') => {
                        attrs.push(RawAttr {
                            name: canon_attr(&attr_name_buf),
                            value: std::mem::take(&mut attr_value_buf),
                        });
                        self.state = State::AfterAttrValue;
                    }
                    Some(c) => attr_value_buf.push(c),
                    None => {
                        out.push(Token::Eof);
                        break;
                    }
                },
                State::AttrValueUnquoted => match self.peek() {
                    Some(c) if c.is_ascii_whitespace() => {
                        self.pos += 1;
                        attrs.push(RawAttr {
                            name: canon_attr(&attr_name_buf),
                            value: std::mem::take(&mut attr_value_buf),
                        });
                        self.state = State::BeforeAttrName;
                    }
                    Some('>') => {
                        self.pos += 1;
                        attrs.push(RawAttr {
                            name: canon_attr(&attr_name_buf),
                            value: std::mem::take(&mut attr_value_buf),
                        });
                        emit_start_tag(&mut out, &tag_name_buf, &mut attrs, false, is_end_tag);
                        self.state = State::Data;
                    }
                    Some(c) => {
                        self.pos += 1;
                        attr_value_buf.push(c);
                    }
                    None => {
                        out.push(Token::Eof);
                        break;
                    }
                },
                State::AfterAttrValue => match self.peek() {
                    Some(c) if c.is_ascii_whitespace() => {
                        self.pos += 1;
                        self.state = State::BeforeAttrName;
                    }
                    Some('/') => {
                        self.pos += 1;
                        self.state = State::SelfClosingStart;
                    }
                    Some('>') => {
                        self.pos += 1;
                        emit_start_tag(&mut out, &tag_name_buf, &mut attrs, false, is_end_tag);
                        self.state = State::Data;
                    }
                    _ => self.state = State::BeforeAttrName,
                },
                State::SelfClosingStart => match self.advance() {
                    Some('>') => {
                        self_closing = true;
                        emit_start_tag(&mut out, &tag_name_buf, &mut attrs, self_closing, is_end_tag);
                        self.state = State::Data;
                    }
                    None => {
                        out.push(Token::Eof);
                        break;
                    }
                    _ => self.state = State::BeforeAttrName,
                },
                State::MarkupDeclarationOpen => {
                    if self.rest_starts_with("--") {
                        self.pos += 2;
                        comment_buf.clear();
                        self.state = State::CommentStart;
                    } else {
                        // DOCTYPE or CDATA: skip to next '>' and discard.
                        while let Some(c) = self.advance() {
                            if c == '>' {
                                break;
                            }
                        }
                        self.state = State::Data;
                    }
                }
                State::CommentStart => {
                    self.state = State::Comment;
                }
                State::Comment => {
                    if self.rest_starts_with("-->") {
                        self.pos += 3;
                        out.push(Token::Comment(std::mem::take(&mut comment_buf)));
                        self.state = State::Data;
                    } else if let Some(c) = self.advance() {
                        comment_buf.push(c);
                    } else {
                        return Err(DomError::malformed_html("unterminated comment at end of input"));
                    }
                }
            }
        }
        Ok(out)
    }
}

fn emit_start_tag(
    out: &mut Vec<Token>,
    name: &str,
    attrs: &mut Vec<RawAttr>,
    self_closing: bool,
    is_end_tag: bool,
) {
    if is_end_tag {
        out.push(Token::EndTag { name: canon_tag(name) });
    } else {
        let mut deduped: Vec<RawAttr> = Vec::with_capacity(attrs.len());
        let mut seen: SmallVec<[&str; 8]> = SmallVec::new();
        for a in attrs.iter() {
            if !seen.contains(&a.name.as_str()) {
                seen.push(a.name.as_str());
                deduped.push(a.clone());
            }
        }
        out.push(Token::StartTag {
            name: canon_tag(name),
            attrs: deduped,
            self_closing,
        });
    }
    attrs.clear();
}

/// Convenience wrapper over [`Tokenizer::tokenize_all`].
pub fn tokenize(html: &str) -> Result<Vec<Token>, DomError> {
    Tokenizer::new(html).tokenize_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_simple_element() {
        let tokens = tokenize("<div class=\"a\">hi</div>").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::StartTag {
                    name: "div".into(),
                    attrs: vec![RawAttr {
                        name: "class".into(),
                        value: "a".into()
                    }],
                    self_closing: false,
                },
                Token::Text("hi".into()),
                Token::EndTag { name: "div".into() },
                Token::Eof,
            ]
        );
    }

    #[test]
    fn tag_and_attribute_names_are_canonicalized() {
        let tokens = tokenize("<DIV CLASS='x'></DIV>").unwrap();
        match &tokens[0] {
            Token::StartTag { name, attrs, .. } => {
                assert_eq!(name, "div");
                assert_eq!(attrs[0].name, "class");
            }
            other => panic!("expected start tag, got {other:?}"),
        }
    }

    #[test]
    fn self_closing_void_tag() {
        let tokens = tokenize("<br/>").unwrap();
        assert_eq!(
            tokens[0],
            Token::StartTag {
                name: "br".into(),
                attrs: vec![],
                self_closing: true,
            }
        );
    }

    #[test]
    fn unquoted_and_single_quoted_attribute_values() {
        let tokens = tokenize("<a href=foo id='bar'>").unwrap();
        match &tokens[0] {
            Token::StartTag { attrs, .. } => {
                assert_eq!(attrs[0].value, "foo");
                assert_eq!(attrs[1].value, "bar");
            }
            other => panic!("expected start tag, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_attributes_keep_first_occurrence() {
        let tokens = tokenize("<div id=\"a\" id=\"b\">").unwrap();
        match &tokens[0] {
            Token::StartTag { attrs, .. } => {
                assert_eq!(attrs.len(), 1);
                assert_eq!(attrs[0].value, "a");
            }
            other => panic!("expected start tag, got {other:?}"),
        }
    }

    #[test]
    fn comments_are_tokenized_and_not_decoded() {
        let tokens = tokenize("<!-- a &amp; b -->").unwrap();
        assert_eq!(tokens[0], Token::Comment(" a &amp; b ".into()));
    }

    #[test]
    fn entities_are_not_decoded_in_text() {
        let tokens = tokenize("&amp;").unwrap();
        assert_eq!(tokens[0], Token::Text("&amp;".into()));
    }

    #[test]
    fn unterminated_comment_at_eof_is_malformed_html() {
        let err = tokenize("<div><!-- never closed").unwrap_err();
        assert!(matches!(err, DomError::MalformedHtml(_)));
    }
}
