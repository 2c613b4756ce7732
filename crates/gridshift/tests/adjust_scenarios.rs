//! End-to-end adjustment scenarios on a small workbook

use gridshift::prelude::*;
use gridshift::{
    adjust_sheet, CalcCell, CalcChain, EditContext, MergeCell, MergeCells, Relationship,
    RelationshipStore, Row,
};
use pretty_assertions::assert_eq;

/// Relationship store that only records what it was asked to delete
#[derive(Default)]
struct RecordingStore {
    deleted: Vec<(String, String)>,
}

impl RelationshipStore for RecordingStore {
    fn delete_relationship(&mut self, sheet: &str, rel_id: &str) {
        self.deleted.push((sheet.to_string(), rel_id.to_string()));
    }
}

fn workbook_with(names: &[&str]) -> Workbook {
    let mut wb = Workbook::new();
    for name in names {
        wb.add_worksheet_with_name(name).unwrap();
    }
    wb
}

fn hyperlink_anchors(ws: &Worksheet) -> Vec<String> {
    ws.hyperlinks()
        .map(|h| h.links.iter().map(|l| l.reference.clone()).collect())
        .unwrap_or_default()
}

/// A two-row merge in one column loses its only extra row and disappears
#[test]
fn test_merge_collapsing_to_one_cell_is_removed() {
    let mut wb = workbook_with(&["Sheet1"]);
    let sheet = wb.worksheet_by_name_mut("Sheet1").unwrap();
    sheet.merge_range(&CellRange::parse("B5:B6").unwrap()).unwrap();
    sheet.merge_range(&CellRange::parse("D5:E6").unwrap()).unwrap();

    let stats = wb.adjust("Sheet1", Axis::Row, 6, -1).unwrap();
    assert_eq!(stats.merge_cells_removed, 1);

    let merges = wb.worksheet_by_name("Sheet1").unwrap().merge_cells().unwrap();
    assert_eq!(merges.count(), 1);
    assert_eq!(merges.cells()[0].reference, "D5:E5");
}

#[test]
fn test_merge_single_column_removed_entirely() {
    let mut wb = workbook_with(&["Sheet1"]);
    let sheet = wb.worksheet_by_name_mut("Sheet1").unwrap();
    sheet.merge_range(&CellRange::parse("C5:C6").unwrap()).unwrap();

    wb.adjust("Sheet1", Axis::Row, 6, -1).unwrap();

    assert!(wb.worksheet_by_name("Sheet1").unwrap().merge_cells().is_none());
}

/// Deleting the row of the middle hyperlink drops exactly that link
#[test]
fn test_hyperlink_deletion_order() {
    let mut ws = Worksheet::new("Sheet1", 1);
    ws.add_hyperlink(Hyperlink::external("A3", "rId1"));
    ws.add_hyperlink(Hyperlink::external("A5", "rId2"));
    ws.add_hyperlink(Hyperlink::external("A7", "rId3"));

    let mut store = RecordingStore::default();
    let mut ctx = EditContext {
        sheet_id: 1,
        worksheet: &mut ws,
        calc_chain: None,
        relationships: &mut store,
    };
    let stats = adjust_sheet(&mut ctx, Adjustment::new(Axis::Row, 5, -1)).unwrap();

    assert_eq!(stats.hyperlinks_removed, 1);
    assert_eq!(hyperlink_anchors(&ws), vec!["A3", "A6"]);
    assert_eq!(
        store.deleted,
        vec![("Sheet1".to_string(), "rId2".to_string())]
    );
}

#[test]
fn test_hyperlink_relationship_removed_from_workbook() {
    let mut wb = workbook_with(&["Sheet1", "Sheet2"]);
    for (cell, id) in [("A3", "rId1"), ("A5", "rId2"), ("A7", "rId3")] {
        wb.relationships_mut().add(
            "Sheet1",
            Relationship::hyperlink(id, format!("https://example.com/{id}")),
        );
        wb.worksheet_by_name_mut("Sheet1")
            .unwrap()
            .add_hyperlink(Hyperlink::external(cell, id));
    }
    wb.relationships_mut()
        .add("Sheet2", Relationship::hyperlink("rId2", "https://example.com/other"));

    wb.remove_row("Sheet1", 5).unwrap();

    let rels = wb.relationships();
    let ids: Vec<&str> = rels.for_sheet("Sheet1").iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["rId1", "rId3"]);
    assert!(rels.get("Sheet2", "rId2").is_some());
    assert_eq!(
        hyperlink_anchors(wb.worksheet_by_name("Sheet1").unwrap()),
        vec!["A3", "A6"]
    );
}

/// Removing the filter's header row clears it and un-hides the rows it covered
#[test]
fn test_auto_filter_full_removal() {
    let mut wb = workbook_with(&["Sheet1"]);
    let sheet = wb.worksheet_by_name_mut("Sheet1").unwrap();
    sheet
        .set_auto_filter(&CellRange::parse("A2:C10").unwrap())
        .unwrap();
    for number in 1..=12 {
        sheet.set_row_hidden(number, true);
    }

    let stats = wb.adjust("Sheet1", Axis::Row, 2, -1).unwrap();
    assert!(stats.auto_filter_cleared);

    let sheet = wb.worksheet_by_name("Sheet1").unwrap();
    assert!(sheet.auto_filter().is_none());

    // Rows are renumbered before the filter stage, so the un-hidden rows are
    // the ones numbered 3..=10 once the edit has landed. Old rows 1 and 2 both
    // end up as row 1 and keep their state, as does everything past row 10.
    let hidden: Vec<(u32, bool)> = sheet.rows().iter().map(|r| (r.number, r.hidden)).collect();
    let mut expected = vec![(1, true), (1, true), (2, true)];
    expected.extend((3..=10).map(|n| (n, false)));
    expected.push((11, true));
    assert_eq!(hidden, expected);
}

#[test]
fn test_auto_filter_clear_leaves_rows_outside_filter_hidden() {
    let mut ws = Worksheet::new("Sheet1", 1);
    ws.set_auto_filter(&CellRange::parse("A2:C10").unwrap()).unwrap();
    for number in [1, 2, 3, 7, 11, 12] {
        ws.insert_row(Row::new(number).hidden(true));
    }

    let mut store = RecordingStore::default();
    let mut ctx = EditContext {
        sheet_id: 1,
        worksheet: &mut ws,
        calc_chain: None,
        relationships: &mut store,
    };
    adjust_sheet(&mut ctx, Adjustment::new(Axis::Row, 2, -1)).unwrap();

    let rows: Vec<(u32, bool)> = ws.rows().iter().map(|r| (r.number, r.hidden)).collect();
    assert_eq!(
        rows,
        vec![(1, true), (1, true), (2, true), (6, false), (10, false), (11, true)]
    );
    assert!(store.deleted.is_empty());
}

/// Calc chain entries of other sheets keep their coordinates
#[test]
fn test_calc_chain_cross_sheet_isolation() {
    let mut wb = workbook_with(&["A", "B"]);
    let a = wb.sheet_id("A").unwrap();
    let b = wb.sheet_id("B").unwrap();
    wb.set_calc_chain(Some(CalcChain::new(vec![
        CalcCell::new(a, "C4"),
        CalcCell::new(b, "C4"),
    ])));

    let stats = wb.adjust("A", Axis::Row, 3, -1).unwrap();
    assert_eq!(stats.calc_chain_shifted, 1);

    let refs: Vec<(u32, &str)> = wb
        .calc_chain()
        .unwrap()
        .cells
        .iter()
        .map(|c| (c.sheet_id, c.reference.as_str()))
        .collect();
    assert_eq!(refs, vec![(a, "C3"), (b, "C4")]);
}

#[test]
fn test_insert_then_delete_restores_sheet() {
    let mut wb = workbook_with(&["Sheet1"]);
    let sheet = wb.worksheet_by_name_mut("Sheet1").unwrap();
    for cell in ["A1", "C2", "B4", "E4", "D9"] {
        sheet.set_cell_value(cell, cell).unwrap();
    }
    sheet.merge_range(&CellRange::parse("B2:C5").unwrap()).unwrap();
    sheet.merge_range(&CellRange::parse("A7:A9").unwrap()).unwrap();
    sheet.add_hyperlink(Hyperlink::external("E4", "rId1"));
    sheet
        .set_auto_filter(&CellRange::parse("A1:E9").unwrap())
        .unwrap();
    wb.set_calc_chain(Some(CalcChain::new(vec![CalcCell::new(1, "D9")])));

    let before = snapshot(&wb);
    for axis in [Axis::Row, Axis::Column] {
        wb.adjust("Sheet1", axis, 3, 4).unwrap();
        assert_ne!(snapshot(&wb), before);
        wb.adjust("Sheet1", axis, 3, -4).unwrap();
        assert_eq!(snapshot(&wb), before);
    }
}

#[test]
fn test_column_insert_moves_filter_right_bound_only() {
    let mut wb = workbook_with(&["Sheet1"]);
    wb.worksheet_by_name_mut("Sheet1")
        .unwrap()
        .set_auto_filter(&CellRange::parse("C1:E20").unwrap())
        .unwrap();

    wb.insert_cols("Sheet1", 2, 2).unwrap();

    let filter = wb.worksheet_by_name("Sheet1").unwrap().auto_filter().unwrap();
    assert_eq!(filter.reference, "C1:G20");
}

#[test]
fn test_merge_count_matches_length_after_edits() {
    let mut wb = workbook_with(&["Sheet1"]);
    let sheet = wb.worksheet_by_name_mut("Sheet1").unwrap();
    *sheet.merge_cells_mut() = Some(MergeCells::new(vec![
        MergeCell::new("A1:A2"),
        MergeCell::new("B2:C2"),
        MergeCell::new("D2:D3"),
        MergeCell::new("E5:F8"),
    ]));

    wb.adjust("Sheet1", Axis::Row, 2, -1).unwrap();

    let merges = wb.worksheet_by_name("Sheet1").unwrap().merge_cells().unwrap();
    assert_eq!(merges.count(), merges.len());
    let refs: Vec<&str> = merges.cells().iter().map(|c| c.reference.as_str()).collect();
    assert_eq!(refs, vec!["D1:D2", "E4:F7"]);
}

/// An insert that would push content off the last row is refused and the
/// sheet stays editable
#[test]
fn test_insert_past_last_row_is_refused() {
    let mut wb = workbook_with(&["Sheet1"]);
    let sheet = wb.worksheet_by_name_mut("Sheet1").unwrap();
    sheet.set_cell_value("A5", "five").unwrap();
    sheet.set_cell_value("A1048576", "last").unwrap();

    let err = wb.adjust("Sheet1", Axis::Row, 1, 1).unwrap_err();
    assert_eq!(err, Error::InvalidCoordinate { col: 1, row: 1_048_577 });

    let sheet = wb.worksheet_by_name("Sheet1").unwrap();
    assert!(sheet.cell("A5").unwrap().is_some());
    assert!(sheet.cell("A1048576").unwrap().is_some());

    wb.remove_row("Sheet1", 5).unwrap();
    wb.adjust("Sheet1", Axis::Row, 1, 1).unwrap();

    let sheet = wb.worksheet_by_name("Sheet1").unwrap();
    let last = sheet.cell("A1048576").unwrap().and_then(|c| c.value.as_deref());
    assert_eq!(last, Some("last"));
}

/// Everything the engine can move, flattened for comparison
fn snapshot(wb: &Workbook) -> Vec<String> {
    let sheet = wb.worksheet_by_name("Sheet1").unwrap();
    let mut out = Vec::new();
    for row in sheet.rows() {
        for cell in &row.cells {
            out.push(format!(
                "cell {} row {} = {:?}",
                cell.reference, row.number, cell.value
            ));
        }
    }
    out.extend(hyperlink_anchors(sheet).into_iter().map(|r| format!("link {r}")));
    if let Some(merges) = sheet.merge_cells() {
        out.extend(merges.cells().iter().map(|m| format!("merge {}", m.reference)));
    }
    if let Some(filter) = sheet.auto_filter() {
        out.push(format!("filter {}", filter.reference));
    }
    if let Some(chain) = wb.calc_chain() {
        out.extend(chain.cells.iter().map(|c| format!("calc {} {}", c.sheet_id, c.reference)));
    }
    out
}
