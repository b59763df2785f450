use crate::models::CourseVideo;
use crate::utils::truncate_text;
use yew::prelude::*;

const DESCRIPTION_PREVIEW_LENGTH: usize = 150;

#[derive(Properties, PartialEq)]
pub struct VideoPlayerProps {
    pub video: Option<CourseVideo>,
}

/// Embedded player with parameters that suppress related videos and most of
/// the player chrome.
#[function_component(VideoPlayer)]
pub fn video_player(props: &VideoPlayerProps) -> Html {
    match &props.video {
        Some(video) => {
            let embed_url = format!(
                "https://www.youtube.com/embed/{}?rel=0&modestbranding=1&autoplay=1&controls=1&color=white&iv_load_policy=3",
                video.id
            );
            html! {
                <div class="aspect-video w-full bg-black rounded-lg overflow-hidden">
                    <iframe
                        class="w-full h-full"
                        src={embed_url}
                        title={video.title.clone()}
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                        allowfullscreen={true}
                    />
                </div>
            }
        }
        None => html! {
            <div class="aspect-video w-full bg-gray-200 rounded-lg flex items-center justify-center">
                <div class="text-center text-gray-600">
                    <h3 class="text-lg font-semibold">{"Select a Video"}</h3>
                    <p>{"Choose a lesson from the curriculum to start learning"}</p>
                </div>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct PartialDataWarningProps {
    pub video_fetch_errors: u32,
}

/// Non-blocking notice shown when the backend returned a partial result.
#[function_component(PartialDataWarning)]
pub fn partial_data_warning(props: &PartialDataWarningProps) -> Html {
    if props.video_fetch_errors == 0 {
        return html! {};
    }
    html! {
        <div class="bg-yellow-100 border border-yellow-400 text-yellow-800 px-4 py-2 rounded mb-4 text-sm">
            { format!(
                "Some video details could not be loaded ({} errors). The list may be incomplete and durations may show N/A.",
                props.video_fetch_errors
            ) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CurriculumItemProps {
    pub video: CourseVideo,
    pub index: usize,
    pub active: bool,
    pub expanded: bool,
    pub on_select: Callback<CourseVideo>,
    pub on_toggle_description: Callback<String>,
}

#[function_component(CurriculumItem)]
pub fn curriculum_item(props: &CurriculumItemProps) -> Html {
    let on_click = {
        let on_select = props.on_select.clone();
        let video = props.video.clone();
        Callback::from(move |_| on_select.emit(video.clone()))
    };

    let on_toggle = {
        let on_toggle_description = props.on_toggle_description.clone();
        let video_id = props.video.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_toggle_description.emit(video_id.clone());
        })
    };

    let container_class = if props.active {
        "p-3 bg-blue-50 border-l-4 border-blue-600 cursor-pointer"
    } else {
        "p-3 hover:bg-gray-50 border-l-4 border-transparent cursor-pointer"
    };

    html! {
        <div class={container_class} onclick={on_click}>
            <div class="flex justify-between items-center gap-2">
                <span class="text-sm text-gray-500 shrink-0">{ format!("{}.", props.index + 1) }</span>
                <span class="flex-grow text-sm font-medium text-gray-800">{ &props.video.title }</span>
                <span class="text-xs text-gray-500 bg-gray-100 rounded px-1 shrink-0">{ &props.video.duration }</span>
            </div>
            {
                if props.video.description.is_empty() {
                    html! {}
                } else {
                    let description = if props.expanded {
                        props.video.description.clone()
                    } else {
                        truncate_text(&props.video.description, DESCRIPTION_PREVIEW_LENGTH)
                    };
                    html! {
                        <>
                            <p class="text-xs text-gray-600 mt-1 whitespace-pre-line">{ description }</p>
                            {
                                if props.video.description.chars().count() > DESCRIPTION_PREVIEW_LENGTH {
                                    html! {
                                        <button class="text-xs text-blue-600 hover:underline" onclick={on_toggle}>
                                            { if props.expanded { "Show less" } else { "Show more" } }
                                        </button>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </>
                    }
                }
            }
        </div>
    }
}
