use csquery::{Args, Bound, Operator, and, field, near, not, or, phrase, prefix, range, term};

#[test]
fn test_and() {
    let actual = and(
        Args::new()
            .kw("title", "star")
            .kw("actors", "Harrison Ford")
            .kw("year", ("", 2000)),
    );
    assert_eq!(
        actual.query(),
        "(and actors:'Harrison Ford' title:'star' year:{,2000])"
    );

    let actual = and(Args::new().field("title", "star").field("title", "star2"));
    assert_eq!(actual.query(), "(and title:'star' title:'star2')");

    let actual = and(
        Args::new()
            .arg(field("star", Some("title")))
            .arg(field("star2", Some("title"))),
    );
    assert_eq!(actual.query(), "(and title:'star' title:'star2')");

    let actual = and(
        Args::new()
            .field("title", "star")
            .field("title", "star2")
            .kw("boost", 2),
    );
    assert_eq!(actual.query(), "(and boost=2 title:'star' title:'star2')");
}

#[test]
fn test_and_complex() {
    let actual = and(
        Args::new()
            .arg(not(Args::with("テスト").kw("field", "genres")))
            .arg(or(Args::new()
                .arg(term(Args::with("star").kw("field", "title").kw("boost", 2)))
                .arg(term(Args::with("star").kw("field", "plot"))))),
    );
    assert_eq!(
        actual.query(),
        "(and (not field=genres 'テスト') \
         (or (term field=title boost=2 'star') (term field=plot 'star')))"
    );
}

#[test]
fn test_nested_compose() {
    let actual = and(
        Args::new()
            .arg(not(Args::with("x").kw("field", "genres")))
            .arg(or(Args::with(term(Args::with("y").kw("field", "title"))))),
    );
    assert_eq!(
        actual.query(),
        "(and (not field=genres 'x') (or (term field=title 'y')))"
    );
}

#[test]
fn test_or() {
    let actual = or(
        Args::new()
            .kw("title", "star")
            .kw("actors", "Harrison Ford")
            .kw("year", ("", 2000)),
    );
    assert_eq!(
        actual.query(),
        "(or actors:'Harrison Ford' title:'star' year:{,2000])"
    );

    let actual = or(
        Args::new()
            .field("title", "star")
            .field("title", "star2")
            .kw("boost", 2),
    );
    assert_eq!(actual.query(), "(or boost=2 title:'star' title:'star2')");
}

#[test]
fn test_not() {
    let inner = || {
        and(
            Args::new()
                .kw("actors", "Harrison Ford")
                .kw("year", ("", 2010)),
        )
    };

    assert_eq!(
        not(Args::with(inner())).query(),
        "(not (and actors:'Harrison Ford' year:{,2010]))"
    );
    assert_eq!(
        not(Args::with(inner()).kw("boost", 2)).query(),
        "(not boost=2 (and actors:'Harrison Ford' year:{,2010]))"
    );
}

#[test]
fn test_near() {
    assert_eq!(
        near(Args::with("teenage vampire")).query(),
        "(near 'teenage vampire')"
    );

    let actual = near(
        Args::with("teenage vampire")
            .kw("boost", 2)
            .kw("field", "plot")
            .kw("distance", 2),
    );
    assert_eq!(
        actual.query(),
        "(near field=plot distance=2 boost=2 'teenage vampire')"
    );
}

#[test]
fn test_phrase() {
    assert_eq!(
        phrase(Args::with("teenage girl")).query(),
        "(phrase 'teenage girl')"
    );
    assert_eq!(
        phrase(Args::with("teenage girl").kw("boost", 2).kw("field", "plot")).query(),
        "(phrase field=plot boost=2 'teenage girl')"
    );
}

#[test]
fn test_prefix() {
    assert_eq!(prefix(Args::with("star")).query(), "(prefix 'star')");
    assert_eq!(
        prefix(Args::with("star").kw("boost", 2).kw("field", "title")).query(),
        "(prefix field=title boost=2 'star')"
    );
}

#[test]
fn test_range() {
    assert_eq!(range(Args::with((1990, 2000))).query(), "(range [1990,2000])");
    assert_eq!(range(Args::with("[1990,2000]")).query(), "(range [1990,2000])");

    assert_eq!(
        range(Args::with((Bound::Absent, 2000))).query(),
        "(range {,2000])"
    );
    assert_eq!(range(Args::with(("", 2000))).query(), "(range {,2000])");
    assert_eq!(range(Args::with("{,2000]")).query(), "(range {,2000])");

    assert_eq!(range(Args::with((1990,))).query(), "(range [1990,})");
    assert_eq!(
        range(Args::with((1990, None::<i64>))).query(),
        "(range [1990,})"
    );
    assert_eq!(range(Args::with((1990, ""))).query(), "(range [1990,})");
    assert_eq!(range(Args::with("[1990,}")).query(), "(range [1990,})");

    let dates = ("1967-01-31T23:20:50.650Z", "1967-01-31T23:59:59.999Z");
    assert_eq!(
        range(Args::with(dates)).query(),
        "(range [1967-01-31T23:20:50.650Z,1967-01-31T23:59:59.999Z])"
    );

    assert_eq!(
        range(Args::with((1990, 2000)).kw("field", "date").kw("boost", 2)).query(),
        "(range field=date boost=2 [1990,2000])"
    );
}

#[test]
fn test_term() {
    assert_eq!(term(Args::with("star")).query(), "(term 'star')");
    assert_eq!(term(Args::with(2000)).query(), "(term 2000)");
    assert_eq!(
        term(Args::with(2000).kw("field", "year").kw("boost", 2)).query(),
        "(term field=year boost=2 2000)"
    );
}

#[test]
fn test_preformatted_range_in_named_field() {
    let range_value = "['2000-01-01T00:00:00Z', '2010-01-01T00:00:00Z'}";
    assert_eq!(
        and(Args::new().kw("release_date", range_value)).query(),
        "(and release_date:['2000-01-01T00:00:00Z', '2010-01-01T00:00:00Z'})"
    );
    assert_eq!(
        and(Args::with(and(Args::new().kw("release_date", range_value)))).query(),
        "(and (and release_date:['2000-01-01T00:00:00Z', '2010-01-01T00:00:00Z'}))"
    );
    assert_eq!(
        and(Args::new().kw("_id", "['tt1000000','tt1005000']")).query(),
        "(and _id:['tt1000000','tt1005000'])"
    );
}

#[test]
fn test_options_not_whitelisted_become_fields() {
    assert_eq!(
        or(Args::with("x").kw("distance", 3)).query(),
        "(or 'x' distance:3)"
    );
}

#[test]
fn test_empty_kw_name_renders_bare_value() {
    assert_eq!(and(Args::new().kw("", "x")).query(), "(and 'x')");
}

#[test]
fn test_operator_table() {
    assert_eq!(
        Operator::Near.allowed_options(),
        &["field", "distance", "boost"]
    );
    assert_eq!(Operator::And.allowed_options(), &["boost"]);
    assert_eq!(Operator::Range.to_string(), "range");
    assert_eq!(Operator::from_name("phrase"), Some(Operator::Phrase));
}

#[test]
fn test_operator_build_matches_constructor() {
    let args = || Args::with("star").kw("field", "title");
    assert_eq!(Operator::Prefix.build(args()), prefix(args()));
}
