use quill_core::FixedAdvance;
use quill_text::layout::wrap::{CharMeasure, WrapMode};
use quill_text::{LineTable, SelectionModel};

fn main() {
    println!("=== Selection Demo ===\n");

    let metrics = FixedAdvance::new(0.5, 1.0);
    let measure = CharMeasure::new(&metrics, 20.0, None);

    let text = "The quick brown fox jumps over the lazy dog.";
    let wide = LineTable::build(text, 1000.0, WrapMode::Word, &measure);

    let mut selection = SelectionModel::new();

    println!("Test 1: Forward and backward ranges");
    println!("-----------------------------------");
    selection.set_from_abs(&wide, 4, 9);
    println!("set_from_abs(4, 9): {:?}", selection.selected_text(text, &wide));
    selection.set_from_abs(&wide, 9, 4);
    println!("set_from_abs(9, 4): {:?} (backward)", selection.selected_text(text, &wide));

    println!("\nTest 2: Word selection (double-click semantics)");
    println!("-----------------------------------------------");
    for offset in [6, 9, 20] {
        selection.select_word(offset, text, &wide);
        println!("select_word({offset}): {:?}", selection.selected_text(text, &wide));
    }

    println!("\nTest 3: Re-wrap reconciliation");
    println!("------------------------------");
    selection.set_from_abs(&wide, 35, 10);
    let (anchor, caret) = selection.to_abs(&wide);
    println!("selection before re-wrap: anchor={anchor}, caret={caret}");
    println!("  anchor at {:?}, caret at {:?}", selection.anchor(), selection.caret());

    // Re-wrap to 120 px (12 characters) and re-resolve the offsets.
    let narrow = LineTable::build(text, 120.0, WrapMode::Word, &measure);
    selection.set_from_abs(&narrow, anchor, caret);
    println!("after re-wrap to {} lines:", narrow.len());
    println!("  anchor at {:?}, caret at {:?}", selection.anchor(), selection.caret());
    let (anchor, caret) = selection.to_abs(&narrow);
    println!("  offsets preserved: anchor={anchor}, caret={caret}");
}
