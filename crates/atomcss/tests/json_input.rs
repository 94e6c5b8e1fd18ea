//! Compiling style trees decoded from JSON.

use atomcss::{Engine, StyleTree};

#[test]
fn test_json_tree_compiles_in_document_order() {
    let tree = StyleTree::from_json(
        r#"{
            "zIndex": 10,
            "color": "gold",
            "padding": [4, "1em"],
            "&:focus": { "outline": "none" },
            "@media print": { "display": "none" },
            "hidden": null,
            "visible": false
        }"#,
    )
    .unwrap();

    let mut engine = Engine::default();
    assert_eq!(engine.class_names(&tree), "t0 t1 t2 t3 t4 t5");
    insta::assert_snapshot!(engine.full_css(), @r"
    .t0{z-index:10;}
    .t1{color:gold;}
    .t2{padding:4px;}
    .t3{padding:1em;}
    .t4:focus{outline:none;}
    @media print{.t5{display:none;}}
    ");
}

#[test]
fn test_json_and_literal_trees_share_cache() {
    let mut engine = Engine::default();
    let from_json = StyleTree::from_json(r#"{"margin": 0}"#).unwrap();
    let literal = StyleTree::new().with("margin", 0);

    assert_eq!(engine.class_names(&from_json), "t0");
    assert_eq!(engine.class_names(&literal), "t0");
}
