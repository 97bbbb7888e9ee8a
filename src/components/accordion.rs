use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::FaqEntry;
use crate::hooks::stagger_style;

/// Which panel is open. The accordion is collapsible and single-open:
/// expanding a panel closes any other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    pub fn toggle(self, index: usize) -> Self {
        if self.is_open(index) {
            self.collapse()
        } else {
            self.expand(index)
        }
    }

    pub fn expand(self, index: usize) -> Self {
        Self { open: Some(index) }
    }

    pub fn collapse(self) -> Self {
        Self { open: None }
    }

    pub fn is_open(self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    pub items: Vec<FaqEntry>,
}

#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    let state = use_state(AccordionState::default);

    html! {
        <div class="faq-list">
            { for props.items.iter().enumerate().map(|(index, item)| {
                let toggle = {
                    let state = state.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        state.set(state.toggle(index));
                    })
                };
                let open = state.is_open(index);
                // The section heading takes the first entrance slot, so the
                // items start one step later.
                html! {
                    <div
                        class={classes!("faq-item", "reveal-item", open.then(|| "open"))}
                        style={stagger_style(index + 1)}
                    >
                        <button class="faq-question" onclick={toggle}>
                            <span class="question-text">{ &item.question }</span>
                            <span class="toggle-icon">{ if open { "−" } else { "+" } }</span>
                        </button>
                        <div class="faq-answer">
                            <p>{ &item.answer }</p>
                        </div>
                    </div>
                }
            }) }
            <style>
                {r#"
                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .faq-item {
                    background: #ffffff;
                    border: 1px solid #e2e8f0;
                    border-radius: 8px;
                    overflow: hidden;
                    box-shadow: 0 1px 2px rgba(15, 30, 60, 0.06);
                }

                .faq-item:hover {
                    border-color: #bcccdf;
                }

                .faq-question {
                    width: 100%;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    color: #1a202c;
                    font-size: 1.05rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                }

                .faq-question:hover {
                    color: #1e3a5f;
                }

                .toggle-icon {
                    font-size: 1.4rem;
                    color: #1e3a5f;
                    line-height: 1;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                    padding: 0 1.5rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 2000px;
                    padding: 0 1.5rem 1.25rem;
                }

                .faq-answer p {
                    color: #5a6575;
                    line-height: 1.6;
                    margin: 0;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_opens_and_closes() {
        let state = AccordionState::default();
        assert!(!state.is_open(0));
        let state = state.toggle(0);
        assert!(state.is_open(0));
        let state = state.toggle(0);
        assert!(!state.is_open(0));
    }

    #[test]
    fn test_single_open() {
        let state = AccordionState::default().toggle(0).toggle(2);
        assert!(!state.is_open(0));
        assert!(state.is_open(2));
    }

    #[test]
    fn test_expand_is_idempotent() {
        let once = AccordionState::default().expand(1);
        let twice = once.expand(1);
        assert_eq!(once, twice);
        assert!(twice.is_open(1));
    }

    #[test]
    fn test_outcome_independent_of_other_items() {
        // Toggling an item lands in the same state no matter what was open.
        let from_closed = AccordionState::default().toggle(1);
        let from_other = AccordionState::default().expand(0).toggle(1);
        assert_eq!(from_closed, from_other);
        assert!(from_other.is_open(1));
    }

    #[test]
    fn test_collapse_clears_everything() {
        let state = AccordionState::default().expand(2).collapse();
        assert_eq!(state, AccordionState::default());
    }
}
