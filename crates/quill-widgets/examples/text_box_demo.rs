use std::rc::Rc;

use anyhow::Result;
use quill_core::FixedAdvance;
use quill_widgets::{KeyCode, KeyEvent, Modifiers, Resizable, SharedStyle, TextBox, TextBoxStyle};

fn dump(label: &str, text_box: &TextBox) {
    println!("{label}");
    println!("  lines: {}", text_box.lines_count());
    for line in text_box.visible_lines() {
        println!("  | {line}");
    }
    println!(
        "  caret at {}, selection {:?}\n",
        text_box.caret_position(),
        text_box.selected_text()
    );
}

fn main() -> Result<()> {
    // 10 px per character, 20 px per line.
    let mut text_box = TextBox::new(Rc::new(FixedAdvance::new(0.5, 1.0)));
    text_box.set_style(SharedStyle::new(TextBoxStyle {
        padding_x: 0.0,
        padding_y: 0.0,
        ..TextBoxStyle::default()
    }));
    text_box.set_text_size(20.0);
    text_box.set_size(120.0, 80.0);

    text_box.on_text_changed(|text| println!("  [signal] TextChanged: {text:?}"));
    text_box.connect("SelectionChanged", |_| println!("  [signal] SelectionChanged"))?;

    text_box.set_text("The quick brown fox jumps over the lazy dog.");
    dump("After set_text:", &text_box);

    text_box.set_selected_text(4, 9);
    dump("After selecting chars 4..9:", &text_box);

    text_box.text_entered('X');
    dump("After typing 'X' over the selection:", &text_box);

    let ctrl = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };
    text_box.key_pressed(KeyEvent::with_modifiers(KeyCode::End, ctrl));
    dump("After Ctrl+End:", &text_box);

    Ok(())
}
