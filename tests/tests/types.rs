use ormlet::{params, Model, Type, Value};
use pretty_assertions::assert_eq;
use tests::setup;

#[derive(Debug, Default, Clone, PartialEq, Model)]
struct Sample {
    #[key]
    id: u32,
    flag: bool,
    ratio: f64,
    note: Option<String>,
    data: Vec<u8>,

    #[skip]
    scratch: String,
}

#[tokio::test]
async fn kinds_map_to_sqlite_types() {
    let db = setup().await;
    let mut s = db.session();

    let table = s.model::<Sample>().unwrap().ref_table().unwrap();
    let types: Vec<_> = table.fields.iter().map(|f| f.ty.as_str()).collect();
    assert_eq!(types, ["integer", "bool", "real", "text", "blob"]);

    let desc = <Sample as ormlet::Record>::describe();
    assert_eq!(desc.fields[0].ty, Type::U32);
}

#[tokio::test]
async fn values_survive_storage() {
    let db = setup().await;
    let mut s = db.session();
    s.model::<Sample>().unwrap().create_table().await.unwrap();

    let stored = [
        Sample {
            id: 1,
            flag: true,
            ratio: 0.5,
            note: Some("hello".to_string()),
            data: vec![1, 2, 3],
            scratch: "not stored".to_string(),
        },
        Sample {
            id: 2,
            flag: false,
            ratio: -1.25,
            note: None,
            data: vec![],
            scratch: String::new(),
        },
    ];
    s.insert(&mut stored.clone()).await.unwrap();

    let mut loaded = vec![];
    s.order_by("id").find::<Sample>(&mut loaded).await.unwrap();

    assert_eq!(loaded[0].note.as_deref(), Some("hello"));
    assert_eq!(loaded[0].data, [1, 2, 3]);
    assert!(loaded[0].flag);
    assert_eq!(loaded[0].scratch, "");
    assert_eq!(loaded[1].note, None);
    assert!(!loaded[1].flag);
    assert_eq!(loaded[1].ratio, -1.25);

    let row = s
        .raw("SELECT note FROM Sample WHERE id = ?", params![2u32])
        .query_row()
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row[0], Value::Null);
}

#[tokio::test]
async fn wrong_storage_class_is_a_conversion_error() {
    let db = setup().await;
    let mut s = db.session();

    s.raw(
        "CREATE TABLE Sample (id integer, flag bool, ratio real, note text, data blob)",
        [],
    )
    .exec()
    .await
    .unwrap();
    s.raw(
        "INSERT INTO Sample VALUES (?, ?, ?, ?, ?)",
        params!["not a number", true, 1.0f64, "n", vec![0u8]],
    )
    .exec()
    .await
    .unwrap();

    let mut loaded = vec![];
    let err = s
        .model::<Sample>()
        .unwrap()
        .find::<Sample>(&mut loaded)
        .await
        .unwrap_err();
    assert!(err.is_type_conversion());
    assert!(loaded.is_empty());
}
