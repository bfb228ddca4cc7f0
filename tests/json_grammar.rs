use pretty_assertions::assert_eq;
use std::sync::Arc;
use textcomb::prelude::*;
use textcomb::{
    BoxedParser, ParseError, between, char, char_except_any, decimal, lazy, parse, string,
};

#[derive(Debug, Clone, PartialEq)]
enum Json {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Json>),
    Object(Vec<(String, Json)>),
}

fn symbol<'code>(c: char) -> impl Parser<'code, Output = char> {
    char(c).token()
}

fn json_string<'code>() -> impl Parser<'code, Output = String> {
    let escaped = char('\\').ignore_then(
        char('"')
            .or(char('\\'))
            .or(char('/'))
            .or(char('n').to('\n'))
            .or(char('t').to('\t')),
    );
    let plain = char_except_any("\"\\");
    between(char('"'), plain.or(escaped).many().text(), char('"')).named("string")
}

fn json_value<'code>() -> BoxedParser<'code, Json> {
    let null = string("null").to(Json::Null);
    let boolean = string("true")
        .to(Json::Bool(true))
        .or(string("false").to(Json::Bool(false)));
    let number = decimal().map(Json::Number);
    let text = json_string().map(Json::String);

    let array = between(
        symbol('['),
        lazy(json_value).delimited_by(symbol(',')).optional(),
        symbol(']'),
    )
    .map(|items| Json::Array(items.unwrap_or_default()));

    let member = json_string()
        .token()
        .then_ignore(symbol(':'))
        .and(lazy(json_value));
    let object = between(
        symbol('{'),
        member.delimited_by(symbol(',')).optional(),
        symbol('}'),
    )
    .map(|members| Json::Object(members.unwrap_or_default()));

    object
        .or(array)
        .or(text)
        .or(number)
        .or(boolean)
        .or(null)
        .token()
        .boxed()
}

fn member(key: &str, value: Json) -> (String, Json) {
    (key.to_string(), value)
}

#[test]
fn test_number_array() {
    let value = parse(&json_value(), "[10, 2, 3, 5]").unwrap();
    assert_eq!(
        value,
        Json::Array(vec![
            Json::Number(10.0),
            Json::Number(2.0),
            Json::Number(3.0),
            Json::Number(5.0),
        ])
    );
}

#[test]
fn test_scalars() {
    let parser = json_value();
    assert_eq!(parse(&parser, "null").unwrap(), Json::Null);
    assert_eq!(parse(&parser, " true ").unwrap(), Json::Bool(true));
    assert_eq!(parse(&parser, "false").unwrap(), Json::Bool(false));
    assert_eq!(parse(&parser, "-1.5e2").unwrap(), Json::Number(-150.0));
    assert_eq!(
        parse(&parser, r#""tab\tquote\" slash\/""#).unwrap(),
        Json::String("tab\tquote\" slash/".to_string())
    );
}

#[test]
fn test_nested_document() {
    let source = r#"
        {
            "name": "textcomb",
            "tags": ["parser", "combinator"],
            "empty": {},
            "none": [],
            "meta": {"stable": false, "score": 9.5, "owner": null}
        }
    "#;
    let expected = Json::Object(vec![
        member("name", Json::String("textcomb".to_string())),
        member(
            "tags",
            Json::Array(vec![
                Json::String("parser".to_string()),
                Json::String("combinator".to_string()),
            ]),
        ),
        member("empty", Json::Object(vec![])),
        member("none", Json::Array(vec![])),
        member(
            "meta",
            Json::Object(vec![
                member("stable", Json::Bool(false)),
                member("score", Json::Number(9.5)),
                member("owner", Json::Null),
            ]),
        ),
    ]);
    assert_eq!(parse(&json_value(), source).unwrap(), expected);
}

#[test]
fn test_missing_member_value() {
    let error = parse(&json_value(), r#"{"a":}"#).unwrap_err();
    assert_eq!(error.offset(), 5);
    assert_eq!((error.line(), error.column()), (1, 6));
    assert_eq!(
        error.expected(),
        &["'{'", "'['", "string", "number", "\"true\"", "\"false\"", "\"null\""]
    );
    assert_eq!(
        error.to_string(),
        "Parsing failure: expected '{', '[', string, number, \"true\", \"false\", \"null\" but found '}' (Line 1, Column 6)."
    );
}

#[test]
fn test_trailing_comma() {
    let error = parse(&json_value(), "[1, 2,]").unwrap_err();
    assert_eq!(error.offset(), 6);
    assert!(error.expected().iter().any(|e| e == "number"));
}

#[test]
fn test_unterminated_string() {
    let error = parse(&json_value(), r#"["open"#).unwrap_err();
    assert_eq!(error.offset(), 6);
    assert!(error.message().ends_with("but found '<end of input>'"));
}

#[test]
fn test_trailing_garbage() {
    let error = parse(&json_value(), "[1] x").unwrap_err();
    assert_eq!(error.expected(), &["end of input"]);
    assert_eq!(error.column(), 5);
}

#[test]
fn test_error_on_later_line_renders_context() {
    let source = "{\n  \"a\": 1,\n  \"b\": tru\n}";
    let error = parse(&json_value(), source).unwrap_err();
    assert!(matches!(error, ParseError::Syntax { line: 3, .. }));
    let rendered = error.render(source);
    assert!(rendered.contains("  > 3 |   \"b\": tru"));
    assert!(rendered.contains("^--- here"));
}

#[test]
fn test_deep_nesting() {
    let depth = 64;
    let source = format!("{}1{}", "[".repeat(depth), "]".repeat(depth));
    let mut value = parse(&json_value(), &source).unwrap();
    let mut seen = 0;
    while let Json::Array(mut items) = value {
        assert_eq!(items.len(), 1);
        value = items.remove(0);
        seen += 1;
    }
    assert_eq!(seen, depth);
    assert_eq!(value, Json::Number(1.0));
}

#[test]
fn test_shared_across_threads() {
    let parser: Arc<BoxedParser<'static, Json>> = Arc::new(json_value());
    let inputs = ["[1, 2]", r#"{"k": [true]}"#, "null", "[[], {}]"];

    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| {
                let parser = Arc::clone(&parser);
                scope.spawn(move || parse(&parser, input).is_ok())
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    });
}
