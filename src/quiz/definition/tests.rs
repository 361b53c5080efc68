use super::*;

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

fn headers() -> Vec<String> {
    row(&["Question", "Option A", "Option B", "Option C", "Option D", "Answer"])
}

fn table(name: &str, rows: Vec<Vec<String>>) -> RawTable {
    RawTable::new(name, headers(), rows)
}

fn question_texts(set: &QuestionSet) -> Vec<&str> {
    set.get_questions()
        .iter()
        .map(|q| q.question.as_str())
        .collect()
}

#[test]
fn merges_tables_without_duplicates() {
    let first = table("first", vec![row(&["Q1", "A1", "B1", "C1", "D1", "A"])]);
    let second = table(
        "second",
        vec![
            row(&["Q1", "A1", "B1", "C1", "D1", "A"]),
            row(&["Q2", "A2", "B2", "C2", "D2", "B"]),
        ],
    );

    let set = ingest(&[first, second]).unwrap();
    assert_eq!(question_texts(&set), vec!["Q1", "Q2"]);
}

#[test]
fn removes_duplicates_within_a_table() {
    let rows = vec![
        row(&["Q1", "A1", "B1", "C1", "D1", "A"]),
        row(&["Q2", "A2", "B2", "C2", "D2", "B"]),
        row(&["Q1", "other", "other", "other", "other", "C"]),
    ];
    let set = ingest(&[table("single", rows)]).unwrap();
    assert_eq!(set.len(), 2);
}

#[test]
fn earliest_duplicate_wins() {
    let first = table("first", vec![row(&["Q1", "A1", "B1", "C1", "D1", "A"])]);
    let second = table("second", vec![row(&["Q1", "W", "X", "Y", "Z", "D"])]);

    let set = ingest(&[first, second]).unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set.get_questions()[0].answer, "A");
    assert_eq!(set.get_questions()[0].option_a, "A1");
}

#[test]
fn drops_rows_with_missing_fields() {
    let rows = vec![
        row(&["Q1", "A1", "B1", "C1", "D1", "A"]),
        row(&["Q3", "A3", "B3", "C3", "D3", ""]),
        row(&["Q4", "A4", "", "C4", "D4", "C"]),
        row(&["Q5", "A5", "B5", "C5"]),
        row(&["", "A6", "B6", "C6", "D6", "D"]),
    ];
    let set = ingest(&[table("gaps", rows)]).unwrap();
    assert_eq!(question_texts(&set), vec!["Q1"]);
}

#[test]
fn treats_null_markers_as_missing() {
    let rows = vec![
        row(&["Q1", "A1", "B1", "C1", "D1", "A"]),
        row(&["Q2", "NaN", "B2", "C2", "D2", "B"]),
        row(&["Q3", "A3", "N/A", "C3", "D3", "B"]),
        row(&["Q4", "A4", "B4", "null", "D4", "B"]),
        row(&["Q5", "A5", "B5", "C5", "D5", "   "]),
    ];
    let set = ingest(&[table("nulls", rows)]).unwrap();
    assert_eq!(question_texts(&set), vec!["Q1"]);
}

#[test]
fn complete_duplicate_replaces_incomplete_one() {
    let rows = vec![
        row(&["Q1", "A1", "B1", "C1", "D1", ""]),
        row(&["Q1", "A1", "B1", "C1", "D1", "B"]),
    ];
    let set = ingest(&[table("late", rows)]).unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set.get_questions()[0].answer, "B");
}

#[test]
fn ignores_extra_columns() {
    let rows = vec![row(&["Q1", "A1", "B1", "C1", "D1", "A", "", "notes"])];
    let set = ingest(&[table("wide", rows)]).unwrap();
    assert_eq!(
        set.get_questions()[0],
        Question::new("Q1", "A1", "B1", "C1", "D1", "A")
    );
}

#[test]
fn ignores_header_names() {
    let headers = row(&["foo", "bar", "baz", "qux", "quux", "corge"]);
    let rows = vec![row(&["Q1", "A1", "B1", "C1", "D1", "A"])];
    let set = ingest(&[RawTable::new("renamed", headers, rows)]).unwrap();
    assert_eq!(question_texts(&set), vec!["Q1"]);
}

#[test]
fn rejects_narrow_tables() {
    let narrow = RawTable::new(
        "narrow",
        row(&["Question", "A", "B", "C", "D"]),
        vec![row(&["Q1", "A1", "B1", "C1", "D1"])],
    );
    let wide = table("wide", vec![row(&["Q1", "A1", "B1", "C1", "D1", "A"])]);

    match ingest(&[wide, narrow]) {
        Err(QuizError::MalformedInput { table, columns }) => {
            assert_eq!(table, "narrow");
            assert_eq!(columns, 5);
        }
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn fails_when_nothing_survives() {
    let rows = vec![row(&["Q1", "A1", "B1", "C1", "D1", ""])];
    assert!(matches!(
        ingest(&[table("empty", rows)]),
        Err(QuizError::EmptyResult)
    ));
    assert!(matches!(ingest(&[]), Err(QuizError::EmptyResult)));
}

#[test]
fn reads_csv_tables() {
    let csv = "Question,A,B,C,D,Answer\n\
               What is 2+2?, 3 , 4 ,5,6,B\n\
               \"Capital of France, officially?\",Paris,Lyon,Nice,Lille,A\n\
               Short row,1,2\n";
    let table = RawTable::from_reader("inline", csv.as_bytes()).unwrap();
    assert_eq!(table.get_name(), "inline");
    assert_eq!(table.column_count(), 6);
    assert_eq!(table.get_rows().len(), 3);

    let set = ingest(&[table]).unwrap();
    assert_eq!(
        set.get_questions(),
        &vec![
            Question::new("What is 2+2?", "3", "4", "5", "6", "B"),
            Question::new("Capital of France, officially?", "Paris", "Lyon", "Nice", "Lille", "A"),
        ]
    );
}

#[test]
fn counts_columns_from_widest_row() {
    let table = RawTable::new(
        "headerless",
        vec![],
        vec![row(&["Q1", "A1"]), row(&["Q2", "A2", "B2", "C2", "D2", "B"])],
    );
    assert_eq!(table.column_count(), 6);
}
