use reelview_core::viewmodel::HeroSlideVm;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct HeroCarouselProps {
    pub slides: Vec<HeroSlideVm>,
}

/// Rotating backdrop banner on the home page, manual previous/next plus
/// indicator dots.
#[function_component(HeroCarousel)]
pub fn hero_carousel(props: &HeroCarouselProps) -> Html {
    let index = use_state(|| 0_usize);

    let count = props.slides.len();
    if count == 0 {
        return Html::default();
    }
    let current = (*index).min(count - 1);
    let slide = &props.slides[current];

    let prev = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.set((current + count - 1) % count))
    };
    let next = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.set((current + 1) % count))
    };

    html! {
        <section class="hero" aria-label="Featured movies">
            <img class="hero-backdrop" src={slide.backdrop.clone()} alt="" />
            <div class="hero-overlay">
                <h1 class="hero-title">{ slide.title.clone() }</h1>
                <p class="hero-overview">{ slide.overview.clone() }</p>
                <a class="btn btn-primary" href={slide.detail_href.clone()}>
                    { "View details" }
                </a>
            </div>
            <button class="hero-nav hero-prev" aria-label="Previous" onclick={prev}>
                { "‹" }
            </button>
            <button class="hero-nav hero-next" aria-label="Next" onclick={next}>
                { "›" }
            </button>
            <div class="hero-dots" role="tablist">
                { for (0..count).map(|i| {
                    let index = index.clone();
                    html! {
                        <button
                            class={classes!("hero-dot", (i == current).then_some("is-active"))}
                            aria-label={format!("Slide {}", i + 1)}
                            onclick={Callback::from(move |_: MouseEvent| index.set(i))}
                        />
                    }
                }) }
            </div>
        </section>
    }
}
