use cow_utils::CowUtils;
use prettytable::{Attr, Cell, Row, Table};
use rasterfont_fontmanager::FontRegistry;

fn main() {
    colog::init();

    let arg = std::env::args().nth(1);
    let binding = arg.unwrap_or_default();
    let pattern = binding.as_str();

    render_table(&FontRegistry::builtin(), pattern);
}

fn render_table(registry: &FontRegistry, name: &str) {
    let mut table = Table::new();
    table.set_format(*prettytable::format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.set_titles(Row::new(vec![
        Cell::new("Index").with_style(Attr::Bold),
        Cell::new("Name").with_style(Attr::Bold),
        Cell::new("Height").with_style(Attr::Bold),
        Cell::new("C").with_style(Attr::Bold),
        Cell::new("Range").with_style(Attr::Bold),
        Cell::new("Glyphs").with_style(Attr::Bold),
        Cell::new("Bitmap bytes").with_style(Attr::Bold),
    ]));

    let names = registry.names();
    for (index, font) in registry.iter().enumerate() {
        let font_name = names.get(index).copied().unwrap_or_default();
        if !name.is_empty() {
            let fname = font_name.cow_to_ascii_lowercase();
            let name_lower = name.cow_to_ascii_lowercase();
            if !fname.contains(&*name_lower) {
                continue;
            }
        }

        table.add_row(Row::new(vec![
            Cell::new(&index.to_string()),
            Cell::new(font_name),
            Cell::new(&font.height.to_string()),
            Cell::new(&font.c.to_string()),
            Cell::new(&format!("0x{:02x}-0x{:02x}", font.char_start, font.char_end)),
            Cell::new(&font.glyph_count().to_string()),
            Cell::new(&font.bitmap.len().to_string()),
        ]));
    }

    log::info!("{} fonts available", registry.len());
    table.printstd();
}
