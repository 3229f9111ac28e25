use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Space, container, mouse_area, stack};
use iced::window::Direction;
use iced::{Element, Length, Theme, mouse};

const RESIZE_EDGE_THICKNESS: f32 = 6.0;
const RESIZE_CORNER_THICKNESS: f32 = 12.0;

/// Events emitted by the window resize grips.
#[derive(Debug, Clone)]
pub(crate) enum ResizeGripEvent {
    Resize(Direction),
}

/// Render invisible edge and corner grips for an undecorated window.
pub(crate) fn view() -> Element<'static, ResizeGripEvent, Theme, iced::Renderer>
{
    let edge = Length::Fixed(RESIZE_EDGE_THICKNESS);
    let corner = Length::Fixed(RESIZE_CORNER_THICKNESS);

    let top = (Horizontal::Left, Vertical::Top);
    let bottom = (Horizontal::Left, Vertical::Bottom);
    let top_right = (Horizontal::Right, Vertical::Top);
    let bottom_right = (Horizontal::Right, Vertical::Bottom);

    stack![
        grip(Direction::North, (Length::Fill, edge), top),
        grip(Direction::South, (Length::Fill, edge), bottom),
        grip(Direction::East, (edge, Length::Fill), top_right),
        grip(Direction::West, (edge, Length::Fill), top),
        grip(Direction::NorthWest, (corner, corner), top),
        grip(Direction::NorthEast, (corner, corner), top_right),
        grip(Direction::SouthWest, (corner, corner), bottom),
        grip(Direction::SouthEast, (corner, corner), bottom_right),
    ]
    .into()
}

fn grip(
    direction: Direction,
    (width, height): (Length, Length),
    (align_x, align_y): (Horizontal, Vertical),
) -> Element<'static, ResizeGripEvent, Theme, iced::Renderer> {
    let area = mouse_area(Space::new().width(width).height(height))
        .on_press(ResizeGripEvent::Resize(direction))
        .interaction(interaction(direction));

    container(area)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(align_x)
        .align_y(align_y)
        .into()
}

fn interaction(direction: Direction) -> mouse::Interaction {
    match direction {
        Direction::North | Direction::South => {
            mouse::Interaction::ResizingVertically
        },
        Direction::East | Direction::West => {
            mouse::Interaction::ResizingHorizontally
        },
        Direction::NorthWest | Direction::SouthEast => {
            mouse::Interaction::ResizingDiagonallyDown
        },
        Direction::NorthEast | Direction::SouthWest => {
            mouse::Interaction::ResizingDiagonallyUp
        },
    }
}

#[cfg(test)]
mod tests {
    use iced::mouse;
    use iced::window::Direction;

    use super::interaction;

    #[test]
    fn given_edge_directions_when_mapped_then_straight_cursors_are_used() {
        assert_eq!(
            interaction(Direction::North),
            mouse::Interaction::ResizingVertically
        );
        assert_eq!(
            interaction(Direction::West),
            mouse::Interaction::ResizingHorizontally
        );
    }

    #[test]
    fn given_corner_directions_when_mapped_then_diagonal_cursors_are_used() {
        assert_eq!(
            interaction(Direction::SouthEast),
            mouse::Interaction::ResizingDiagonallyDown
        );
        assert_eq!(
            interaction(Direction::NorthEast),
            mouse::Interaction::ResizingDiagonallyUp
        );
    }
}
