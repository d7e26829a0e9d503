use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::ActiveTheme as _;
use gpui_component::list::ListItem;
use gpui_component::{Icon, IconName, Sizable as _, h_flex, v_flex};
use gpui_reorder_list::{
    ReorderConfig, ReorderListItem, ReorderListRowState, ReorderListState, reorder_list,
};

pub struct ReorderListExample {
    list: Entity<ReorderListState<()>>,
}

impl ReorderListExample {
    pub fn view(config: ReorderConfig, _window: &mut Window, cx: &mut App) -> Entity<Self> {
        let items = demo_items();
        let list = cx.new(|cx| {
            let state = ReorderListState::new(cx)
                .items(items)
                .drag_threshold(px(config.drag_threshold))
                .gap(px(config.gap))
                .on_reorder(|reorder, _items| {
                    tracing::info!(
                        item = %reorder.item_id,
                        from = reorder.from,
                        to = reorder.to,
                        "row moved"
                    );
                });
            match config.drag_handle_width {
                Some(width) => state.drag_handle_width(px(width)),
                None => state.drag_on_row(),
            }
        });
        cx.new(|_| Self { list })
    }
}

impl Render for ReorderListExample {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let list = self.list.read(cx);
        let items = list.items_ref();
        let selected_id = list
            .selected_index()
            .and_then(|ix| items.get(ix))
            .map(|item| item.id.to_string())
            .unwrap_or_else(|| "<none>".to_string());
        let drag_index = list
            .drag_index()
            .map(|ix| ix.to_string())
            .unwrap_or_else(|| "-".to_string());
        let dump = items
            .iter()
            .enumerate()
            .map(|(ix, item)| format!("{ix:02}  {}", item.id))
            .collect::<Vec<_>>()
            .join("\n");

        v_flex()
            .size_full()
            .p(px(16.))
            .gap_y_3()
            .child(
                v_flex()
                    .gap_y_1()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(FontWeight::BOLD)
                            .child("Reorder List"),
                    )
                    .child(div().text_sm().text_color(theme.muted_foreground).child(
                        "Drag a row up or down; the other rows make room once its leading edge crosses a neighbor's midpoint. Disabled rows stay put.",
                    ))
                    .child(
                        div()
                            .text_sm()
                            .text_color(theme.muted_foreground)
                            .child(format!("Selected: {selected_id}  Drag index: {drag_index}")),
                    ),
            )
            .child(
                h_flex()
                    .flex_1()
                    .min_h(px(0.))
                    .gap_x_3()
                    .child(
                        div()
                            .w(px(420.))
                            .h_full()
                            .rounded(px(12.))
                            .border_1()
                            .border_color(theme.border)
                            .bg(theme.background)
                            .overflow_hidden()
                            .child(reorder_list(
                                &self.list,
                                move |ix, item, row_state, _window, cx| {
                                    render_row(ix, item, row_state, cx)
                                },
                            )),
                    )
                    .child(
                        div()
                            .flex_1()
                            .min_w(px(0.))
                            .h_full()
                            .rounded(px(12.))
                            .border_1()
                            .border_color(theme.border)
                            .bg(theme.background)
                            .p(px(12.))
                            .child(render_dump(dump)),
                    ),
            )
    }
}

fn render_row(
    ix: usize,
    item: &ReorderListItem<()>,
    row_state: ReorderListRowState,
    cx: &mut App,
) -> ListItem {
    let theme = cx.theme();

    ListItem::new(ix)
        .h_full()
        .when(row_state.dragging, |this| this.opacity(0.9))
        .child(
            h_flex()
                .gap_x_2()
                .items_center()
                .child(
                    Icon::from(IconName::Menu)
                        .small()
                        .text_color(theme.muted_foreground),
                )
                .child(item.label.clone()),
        )
}

fn render_dump(text: String) -> impl IntoElement {
    let lines = text
        .lines()
        .map(|line| div().text_sm().child(line.to_string()));
    v_flex().gap_y_0p5().children(lines)
}

fn demo_items() -> Vec<ReorderListItem<()>> {
    let heights = [px(28.), px(44.), px(64.), px(32.)];

    (0..12)
        .map(|ix| {
            let id = format!("row/{ix:02}");
            let label = format!("Row {ix:02}");
            let item = ReorderListItem::new(id, label, ()).height(heights[ix % heights.len()]);
            item.disabled(ix == 5)
        })
        .collect()
}
