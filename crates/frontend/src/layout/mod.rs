pub mod center;
pub mod global_context;
pub mod left;
pub mod notice_bar;
pub mod right;
pub mod top_header;

use leptos::prelude::*;
use notice_bar::NoticeBar;
use top_header::TopHeader;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// |              NoticeBar                    |
/// +------------------------------------------+
/// | Documents |     Chat      |   Preview    |
/// |   (Left)  |   (Center)    |   (Right)    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C, R>(left: L, center: C, right: R) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
    R: Fn() -> AnyView + 'static + Send,
{
    // Left/Right components get AppGlobalContext internally for
    // visibility control

    view! {
        <div class="app-layout">
            <TopHeader />
            <NoticeBar />

            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    <center::Center>
                        {center()}
                    </center::Center>
                </div>

                <right::Right>
                    {right()}
                </right::Right>
            </div>
        </div>
    }
}
