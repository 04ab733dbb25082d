use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::use_like_counter::use_like_counter;
use crate::services::likes::LikeClient;

const POP_MS: u32 = 400;

/// One floating heart spawned by a like
#[derive(Clone, Debug, PartialEq)]
pub struct HeartParticle {
    pub id: u32,
    pub x_px: f64,
    pub y_px: f64,
    pub scale: f64,
    pub duration_ms: f64,
    pub delay_ms: f64,
}

impl HeartParticle {
    /// Time until the particle can be removed from the page
    pub fn lifetime_ms(&self) -> u32 {
        (self.duration_ms + self.delay_ms + 50.0).ceil() as u32
    }

    fn style(&self) -> String {
        format!(
            "--x:{:.1}px;--y:{:.1}px;--s:{:.2};--d:{:.0}ms;animation-delay:{:.0}ms;animation-duration:{:.0}ms",
            self.x_px, self.y_px, self.scale, self.duration_ms, self.delay_ms, self.duration_ms
        )
    }
}

/// 6-9 hearts spread upwards with random offset, scale and timing
pub fn heart_burst(first_id: u32, mut random: impl FnMut() -> f64) -> Vec<HeartParticle> {
    let count = 6 + (random() * 4.0).floor() as u32;
    (0..count)
        .map(|i| HeartParticle {
            id: first_id + i,
            x_px: (random() - 0.5) * 60.0,
            y_px: -(40.0 + random() * 50.0),
            scale: 0.6 + random() * 0.7,
            duration_ms: 400.0 + random() * 400.0,
            delay_ms: random() * 150.0,
        })
        .collect()
}

#[derive(Default, PartialEq)]
pub struct HeartParticles {
    particles: Vec<HeartParticle>,
}

pub enum ParticleAction {
    Spawn(Vec<HeartParticle>),
    Remove(u32),
}

impl Reducible for HeartParticles {
    type Action = ParticleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut particles = self.particles.clone();
        match action {
            ParticleAction::Spawn(burst) => particles.extend(burst),
            ParticleAction::Remove(id) => particles.retain(|p| p.id != id),
        }
        Rc::new(Self { particles })
    }
}

#[derive(Properties, PartialEq)]
pub struct LikeButtonProps {
    /// `None` renders the widget disabled
    pub client: Option<LikeClient>,
}

#[function_component(LikeButton)]
pub fn like_button(props: &LikeButtonProps) -> Html {
    let counter = use_like_counter(props.client.clone());
    let popping = use_state(|| false);
    let particles = use_reducer(HeartParticles::default);
    let next_particle_id = use_mut_ref(|| 0u32);

    let onclick = {
        let inert = counter.liked || !counter.enabled;
        let on_like = counter.on_like.clone();
        let popping = popping.clone();
        let particles = particles.clone();
        let next_particle_id = next_particle_id.clone();

        Callback::from(move |_: MouseEvent| {
            if inert {
                return;
            }
            on_like.emit(());

            popping.set(true);
            {
                let popping = popping.clone();
                spawn_local(async move {
                    TimeoutFuture::new(POP_MS).await;
                    popping.set(false);
                });
            }

            let burst = {
                let mut next = next_particle_id.borrow_mut();
                let burst = heart_burst(*next, js_sys::Math::random);
                *next += burst.len() as u32;
                burst
            };
            for particle in &burst {
                let particles = particles.clone();
                let id = particle.id;
                let lifetime = particle.lifetime_ms();
                spawn_local(async move {
                    TimeoutFuture::new(lifetime).await;
                    particles.dispatch(ParticleAction::Remove(id));
                });
            }
            particles.dispatch(ParticleAction::Spawn(burst));
        })
    };

    html! {
        <div class="like-widget">
            <button
                id="like-btn"
                class={classes!(
                    "like-btn",
                    counter.liked.then_some("liked"),
                    (!counter.enabled).then_some("disabled"),
                    popping.then_some("pop")
                )}
                disabled={!counter.enabled}
                aria-label="Like this site"
                aria-pressed={counter.liked.to_string()}
                {onclick}
            >
                {"♥"}
            </button>
            <span id="like-count" class="like-count">{counter.count}</span>
            <span id="heart-particles" class="heart-particles" aria-hidden="true">
                {for particles.particles.iter().map(|p| html! {
                    <span key={p.id} class="heart-particle" style={p.style()}>{"♥"}</span>
                })}
            </span>
        </div>
    }
}
