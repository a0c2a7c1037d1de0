use iced::widget::{button, container, text, Column, Row};
use iced::{Border, Color, Element, Length, Theme};

use stamps::{Appearance, Footprint, Surface, Tile};

use crate::Message;

/// Space between a tile's border and its footprint edge
const TILE_MARGIN: u16 = 6;

/// Render the surface as rows of tiles, using the positions the layout
/// engine assigned
pub fn view(surface: &Surface) -> Element<'_, Message> {
    let mut rows: Vec<Vec<Element<'_, Message>>> = (0..surface.rows()).map(|_| Vec::new()).collect();

    // Tiles are in collection order, so columns come out ascending per row
    for (index, tile) in surface.tiles().iter().enumerate() {
        if let Some(cells) = rows.get_mut(tile.row()) {
            cells.push(tile_view(index, tile, surface.footprint()));
        }
    }

    Column::with_children(rows.into_iter().map(|cells| Row::with_children(cells).into())).into()
}

/// One clickable stamp: black box, file name, border coloured by selection
fn tile_view(index: usize, tile: &Tile, footprint: Footprint) -> Element<'_, Message> {
    let (r, g, b) = tile.appearance().border_rgb();
    let border_color = Color::from_rgb8(r, g, b);

    let stamp = container(text(tile.file_name()).size(12).color(Color::WHITE))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Color::BLACK.into()),
            border: Border {
                color: border_color,
                width: Appearance::BORDER_WIDTH,
                radius: 0.0.into(),
            },
            ..container::Style::default()
        });

    let cell = button(stamp)
        .on_press(Message::TileClicked(index))
        .padding(0)
        .style(button::text);

    container(cell)
        .padding(TILE_MARGIN)
        .width(Length::Fixed(footprint.width() as f32))
        .height(Length::Fixed(footprint.height() as f32))
        .into()
}
