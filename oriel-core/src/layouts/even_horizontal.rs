use crate::models::{Handle, WorkspaceId};
use crate::state::State;

use super::LayoutStrategy;

/// Layout which gives each window full output height, but splits the output
/// width among them all.
pub struct EvenHorizontal;

impl<H: Handle> LayoutStrategy<H> for EvenHorizontal {
    fn arrange(&self, state: &mut State<H>, workspace: WorkspaceId) {
        let Some(rect) = state.output_showing(workspace).map(|o| o.rect) else {
            return;
        };
        let members: Vec<_> = match state.workspace(workspace) {
            Some(ws) => ws
                .windows()
                .iter()
                .copied()
                .filter(|id| {
                    state
                        .window(*id)
                        .is_some_and(|w| w.mapped && !w.minimized)
                })
                .collect(),
            None => return,
        };
        if members.is_empty() {
            return;
        }
        let width = rect.width / members.len() as i32;
        let mut x = rect.x;
        for id in members {
            state.move_window(id, x, rect.y);
            state.resize_window(id, width, rect.height);
            x += width;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::TestConfig;
    use crate::models::{Manager, OutputHandle, Rect};
    use crate::{DisplayEvent, layouts};

    #[test]
    fn members_should_split_the_output_width() {
        let mut manager = Manager::new_test(TestConfig {
            default_layout: layouts::EVEN_HORIZONTAL.to_owned(),
            workspaces: vec![crate::config::WorkspaceConfig {
                id: 1,
                name: "main".to_owned(),
                layout: Some(layouts::EVEN_HORIZONTAL.to_owned()),
            }],
            ..TestConfig::default()
        });
        manager.display_event_handler(DisplayEvent::OutputCreate(
            OutputHandle(1),
            Rect {
                x: 0,
                y: 0,
                width: 1000,
                height: 500,
            },
            60_000,
        ));
        let a = manager.state.create_window(1, None, None).expect("window");
        let b = manager.state.create_window(1, None, None).expect("window");
        manager.dispatch_notifications();

        let first = manager.state.window(a).expect("window a");
        assert_eq!((first.x(), first.width()), (0, 500));
        let second = manager.state.window(b).expect("window b");
        assert_eq!((second.x(), second.width()), (500, 500));
        assert_eq!(second.height(), 500);
    }
}
