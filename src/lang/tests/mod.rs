use super::ast::*;
use super::token::*;
use super::{lex, parse, Stage};
use crate::mach::Val;


fn tags(s: &str) -> Vec<Tag> {
    match lex("test", s) {
        Ok(tokens) => tokens.into_iter().map(|t| t.tag).collect(),
        Err(error) => panic!("{}", error),
    }
}

fn statements(s: &str) -> Vec<Statement> {
    let tokens = match lex("test", s) {
        Ok(tokens) => tokens,
        Err(error) => panic!("{}", error),
    };
    match parse(&tokens) {
        Ok(statements) => statements,
        Err(error) => panic!("{}", error),
    }
}

fn parse_str(s: &str) -> String {
    statements(s)
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_err(s: &str) -> String {
    let tokens = match lex("test", s) {
        Ok(tokens) => tokens,
        Err(error) => return error.to_string(),
    };
    match parse(&tokens) {
        Ok(statements) => panic!("parsed {:?}", statements),
        Err(error) => {
            assert_eq!(error.stage(), Stage::Parser);
            error.to_string()
        }
    }
}
