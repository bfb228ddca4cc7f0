use crate::cursor::Cursor;
use crate::error::Failure;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always succeeds without consuming input
#[derive(Debug, Clone)]
pub struct Succeed<T> {
    value: T,
}

impl<T: Clone> Succeed<T> {
    pub fn new(value: T) -> Self {
        Succeed { value }
    }
}

impl<'code, T: Clone> Parser<'code> for Succeed<T> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Ok((self.value.clone(), cursor))
    }
}

/// Parser that yields `value` and consumes nothing
pub fn succeed<T: Clone>(value: T) -> Succeed<T> {
    Succeed::new(value)
}

/// Parser that always fails without consuming input
#[derive(Debug, Clone)]
pub struct Fail<T> {
    message: Cow<'static, str>,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Fail<T> {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Fail {
            message: message.into(),
            _phantom: PhantomData,
        }
    }
}

impl<'code, T> Parser<'code> for Fail<T> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'code>) -> ParseResult<'code, Self::Output> {
        Err(Failure::message(self.message.clone(), cursor))
    }
}

/// Parser that fails with `message` at the current position
pub fn fail<T>(message: impl Into<Cow<'static, str>>) -> Fail<T> {
    Fail::new(message)
}
