use std::sync::Arc;

use dynfunc_engine::{
    Callable, CallableExt, Function, Parameter, ParameterError, ParameterKind, ResolvedCall, Signature, call_with_args, parse_signature_file,
    populate_args,
};
use indexmap::IndexMap;
use serde_json::{Value, json};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_env_filter("dynfunc_engine=trace").with_test_writer().try_init();
}

fn data(entries: &[(&str, Value)]) -> IndexMap<String, Value> {
    entries.iter().map(|(key, value)| (key.to_string(), value.clone())).collect()
}

fn signature(parameters: Vec<Parameter>) -> Signature {
    Signature::new(parameters).expect("valid signature")
}

/// `square(n)`
fn square() -> Function<impl Fn(ResolvedCall) -> i64> {
    Function::new(signature(vec![Parameter::positional_or_keyword("n")]), |call: ResolvedCall| {
        let n: i64 = call.keyword_as("n").ok().flatten().unwrap_or_default();
        n * n
    })
}

/// `f(*, param)`
fn keyword_echo() -> Function<impl Fn(ResolvedCall) -> Value> {
    Function::new(signature(vec![Parameter::keyword_only("param")]), |mut call: ResolvedCall| {
        call.take_keyword("param").unwrap_or_default()
    })
}

/// `g(a, b=1, c=2)` returning `(a, b, c)`
fn triple() -> Function<impl Fn(ResolvedCall) -> (Value, Value, Value)> {
    let signature = signature(vec![
        Parameter::positional_or_keyword("a"),
        Parameter::positional_or_keyword("b").with_default(1),
        Parameter::positional_or_keyword("c").with_default(2),
    ]);
    Function::new(signature, |mut call: ResolvedCall| {
        let a = call.take_keyword("a").unwrap_or_default();
        let b = call.take_keyword("b").unwrap_or_default();
        let c = call.take_keyword("c").unwrap_or_default();
        (a, b, c)
    })
}

#[test]
fn square_ignores_extra_keys() {
    init_tracing();
    let result = call_with_args(&square(), &data(&[("n", json!(5)), ("s", json!(4)), ("tm", json!(3))]));
    assert_eq!(result, Ok(25));
}

#[test]
fn keyword_only_parameter_is_supplied_by_name() {
    let result = call_with_args(&keyword_echo(), &data(&[("param", json!("foo"))]));
    assert_eq!(result, Ok(json!("foo")));
}

#[test]
fn keyword_only_parameter_missing_from_data() {
    let result = call_with_args(&keyword_echo(), &data(&[("other", json!("foo"))]));
    assert_eq!(
        result,
        Err(ParameterError::Missing {
            name: "param".into(),
            available: vec!["other".into()],
        })
    );
    assert_eq!(
        result.unwrap_err().to_string(),
        r#"'param' is not a valid parameter, valid parameters are: ["other"]"#
    );
}

#[test]
fn defaults_fill_omitted_parameters() {
    init_tracing();
    let result = triple().call_with_args(&data(&[("a", json!(1)), ("b", json!(3))]));
    assert_eq!(result, Ok((json!(1), json!(3), json!(2))));
}

#[test]
fn var_positional_callable_is_rejected() {
    let collect = Function::new(signature(vec![Parameter::var_positional("args")]), |call: ResolvedCall| call);
    let error = call_with_args(&collect, &data(&[("args", json!([1]))])).unwrap_err();

    assert_eq!(
        error,
        ParameterError::UnsupportedKind {
            name: "args".into(),
            kind: ParameterKind::VarPositional,
        }
    );
    assert_eq!(error.to_string(), "Unable to populate VAR_POSITIONAL parameter 'args'");
}

#[test]
fn var_keyword_callable_is_rejected() {
    let collect = Function::new(signature(vec![Parameter::var_keyword("args")]), |call: ResolvedCall| call);
    let error = call_with_args(&collect, &data(&[("args", json!([1]))])).unwrap_err();

    assert!(error.is_unsupported_kind());
    assert_eq!(error.to_string(), "Unable to populate VAR_KEYWORD parameter 'args'");
}

#[test]
fn invoke_matches_direct_call_with_named_values() {
    let function = triple();
    let values = data(&[("a", json!("x")), ("b", json!("y")), ("c", json!("z"))]);

    let direct = function.call(ResolvedCall::new(Vec::new(), values.clone()));
    assert_eq!(call_with_args(&function, &values), Ok(direct));
}

#[test]
fn callable_errors_pass_through_unchanged() {
    #[derive(Debug, PartialEq)]
    struct Refused(&'static str);

    let refuse = Function::new(signature(vec![Parameter::keyword_only("reason")]), |_call: ResolvedCall| {
        Err::<(), _>(Refused("not today"))
    });

    let result = call_with_args(&refuse, &data(&[("reason", json!("any"))]));
    assert_eq!(result, Ok(Err(Refused("not today"))));
}

#[test]
fn callable_is_not_called_when_resolution_fails() {
    let calls = std::cell::Cell::new(0);
    let counted = Function::new(signature(vec![Parameter::positional_or_keyword("n")]), |_call: ResolvedCall| {
        calls.set(calls.get() + 1);
    });

    assert!(call_with_args(&counted, &IndexMap::<String, Value>::new()).is_err());
    assert_eq!(calls.get(), 0);
    assert!(call_with_args(&counted, &data(&[("n", json!(1))])).is_ok());
    assert_eq!(calls.get(), 1);
}

#[test]
fn positional_only_values_arrive_in_declared_order() {
    let signature = signature(vec![
        Parameter::positional_only("x"),
        Parameter::positional_only("y"),
        Parameter::positional_or_keyword("z"),
    ]);
    let point = Function::new(signature, |call: ResolvedCall| {
        let (positional, keywords) = call.into_parts();
        (positional, keywords.into_iter().collect::<Vec<_>>())
    });

    let (positional, keywords) = call_with_args(&point, &data(&[("z", json!(3)), ("y", json!(2)), ("x", json!(1))])).unwrap();
    assert_eq!(positional, vec![json!(1), json!(2)]);
    assert_eq!(keywords, vec![("z".to_string(), json!(3))]);
}

#[test]
fn shared_callables_can_be_invoked() {
    let shared: Arc<dyn Callable<Output = i64> + Send + Sync> = Arc::new(square());
    let values = data(&[("n", json!(-4))]);

    assert_eq!(shared.call_with_args(&values), Ok(16));
    assert_eq!(populate_args(&shared, &values).unwrap().keyword("n"), Some(&json!(-4)));
}

#[test]
fn manifest_signature_drives_invocation() {
    let temp_dir = tempfile::tempdir().unwrap();
    let manifest_path = temp_dir.path().join("greet.yaml");
    std::fs::write(
        &manifest_path,
        r#"
parameters:
  - name: name
  - name: greeting
    kind: keyword_only
    default: "hello"
"#,
    )
    .unwrap();

    let greet = Function::new(parse_signature_file(&manifest_path).unwrap(), |call: ResolvedCall| {
        let name: String = call.keyword_as("name").ok().flatten().unwrap_or_default();
        let greeting: String = call.keyword_as("greeting").ok().flatten().unwrap_or_default();
        format!("{greeting}, {name}")
    });

    assert_eq!(greet.call_with_args(&data(&[("name", json!("ada"))])), Ok("hello, ada".to_string()));
    assert_eq!(
        greet.call_with_args(&data(&[("name", json!("ada")), ("greeting", json!("hi"))])),
        Ok("hi, ada".to_string())
    );
}
