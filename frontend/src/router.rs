use crate::course::api::fetch_course;
use crate::course::components::{CurriculumItem, PartialDataWarning, VideoPlayer};
use crate::models::{CourseData, CourseVideo};
use std::collections::HashSet;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <CourseApp /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-700">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Go back to the converter"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

#[function_component(CourseApp)]
pub fn course_app() -> Html {
    let playlist_url = use_state(String::default);
    let course_data = use_state(Option::<CourseData>::default);
    let current_video = use_state(Option::<CourseVideo>::default);
    let loading = use_state(|| false);
    let error_message = use_state(Option::<String>::default);
    let expanded_descriptions = use_state(HashSet::<String>::default);

    let on_url_input = {
        let playlist_url = playlist_url.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            playlist_url.set(input_value);
        })
    };

    let on_submit = {
        let playlist_url = playlist_url.clone();
        let course_data = course_data.clone();
        let current_video = current_video.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            let url = (*playlist_url).clone();

            if url.is_empty() {
                error_message.set(Some("Please enter a YouTube playlist URL".to_string()));
                return;
            }
            if !url.contains("list=") {
                error_message.set(Some(
                    "Please enter a valid YouTube playlist URL (should contain \"?list=\" parameter)".to_string(),
                ));
                return;
            }

            loading.set(true);
            error_message.set(None);

            let course_data = course_data.clone();
            let current_video = current_video.clone();
            let loading = loading.clone();
            let error_message = error_message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                fetch_course(url, course_data, current_video, error_message, loading).await;
            });
        })
    };

    let on_select = {
        let current_video = current_video.clone();
        Callback::from(move |video: CourseVideo| {
            current_video.set(Some(video));
        })
    };

    let on_toggle_description = {
        let expanded_descriptions = expanded_descriptions.clone();
        Callback::from(move |video_id: String| {
            let mut expanded = (*expanded_descriptions).clone();
            if !expanded.remove(&video_id) {
                expanded.insert(video_id);
            }
            expanded_descriptions.set(expanded);
        })
    };

    let on_back = {
        let playlist_url = playlist_url.clone();
        let course_data = course_data.clone();
        let current_video = current_video.clone();
        let error_message = error_message.clone();
        let expanded_descriptions = expanded_descriptions.clone();
        Callback::from(move |_| {
            playlist_url.set(String::new());
            course_data.set(None);
            current_video.set(None);
            error_message.set(None);
            expanded_descriptions.set(HashSet::new());
        })
    };

    html! {
        <div class="min-h-screen bg-gray-700 p-4">
            <header class="text-center text-white mb-6">
                <h1 class="text-3xl font-bold">{"YouTube Playlist to Course Converter"}</h1>
                <p class="text-gray-300">{"Transform YouTube playlists into distraction-free learning experiences"}</p>
            </header>

            {
                if let Some(course) = &*course_data {
                    render_course(
                        course,
                        &current_video,
                        &expanded_descriptions,
                        on_select,
                        on_toggle_description,
                        on_back,
                    )
                } else {
                    html! {
                        <div class="bg-white p-8 rounded-lg shadow-lg w-full max-w-2xl mx-auto">
                            <h2 class="text-xl font-semibold text-center text-gray-800 mb-2">{"Learn Without Distractions"}</h2>
                            <p class="text-center text-gray-600 mb-6">{"Convert any YouTube playlist into a clean, organized course format"}</p>

                            <form onsubmit={on_submit} class="flex mb-4">
                                <input
                                    type="text"
                                    class="flex-grow p-3 border border-gray-300 rounded-l-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                                    placeholder="https://www.youtube.com/playlist?list=..."
                                    value={(*playlist_url).clone()}
                                    oninput={on_url_input}
                                    disabled={*loading}
                                />
                                <button
                                    type="submit"
                                    class="bg-blue-600 text-white p-3 rounded-r-lg hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50"
                                    disabled={*loading}
                                >
                                    { if *loading { "Converting..." } else { "Convert" } }
                                </button>
                            </form>

                            {
                                if let Some(msg) = &*error_message {
                                    html! {
                                        <p class="text-red-600 text-center mb-4">{ format!("Error: {msg}") }</p>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }
                }
            }
        </div>
    }
}

fn render_course(
    course: &CourseData,
    current_video: &UseStateHandle<Option<CourseVideo>>,
    expanded_descriptions: &UseStateHandle<HashSet<String>>,
    on_select: Callback<CourseVideo>,
    on_toggle_description: Callback<String>,
    on_back: Callback<MouseEvent>,
) -> Html {
    html! {
        <div class="bg-white rounded-lg shadow-lg w-full max-w-6xl mx-auto p-6">
            <div class="flex justify-between items-start mb-4">
                <div>
                    <h2 class="text-2xl font-bold text-gray-800">{ &course.title }</h2>
                    <p class="text-sm text-gray-500">
                        { format!("{} lessons", course.stats.total_videos) }
                    </p>
                </div>
                <button class="text-blue-600 hover:underline" onclick={on_back}>
                    {"← Convert another playlist"}
                </button>
            </div>

            <PartialDataWarning video_fetch_errors={course.stats.video_fetch_errors} />

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="lg:col-span-2">
                    <VideoPlayer video={(**current_video).clone()} />
                    {
                        if let Some(video) = &**current_video {
                            html! {
                                <div class="mt-4">
                                    <h3 class="text-lg font-semibold text-gray-800">{ &video.title }</h3>
                                    <span class="text-sm text-gray-500">{ format!("Duration: {}", video.duration) }</span>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class="border border-gray-200 rounded-lg overflow-hidden">
                    <h3 class="bg-gray-100 px-3 py-2 font-semibold text-gray-800">{"Curriculum"}</h3>
                    <div class="max-h-[32rem] overflow-y-auto divide-y divide-gray-100">
                        {
                            course.videos.iter().enumerate().map(|(index, video)| {
                                let active = current_video
                                    .as_ref()
                                    .map(|current| current.id == video.id)
                                    .unwrap_or(false);
                                html! {
                                    <CurriculumItem
                                        key={video.id.clone()}
                                        video={video.clone()}
                                        index={index}
                                        active={active}
                                        expanded={expanded_descriptions.contains(&video.id)}
                                        on_select={on_select.clone()}
                                        on_toggle_description={on_toggle_description.clone()}
                                    />
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}
