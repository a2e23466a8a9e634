use std::rc::Rc;
use yew::prelude::*;

use crate::settings;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Warning,
    Error,
}

impl ToastKind {
    fn alert_class(&self) -> &'static str {
        match self {
            ToastKind::Warning => "alert-warning",
            ToastKind::Error => "alert-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Warning => "fas fa-exclamation-triangle",
            ToastKind::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub kind: ToastKind,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Add(Toast),
    Remove(usize),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Add(toast) => next.toasts.push(toast),
            ToastAction::Remove(id) => next.toasts.retain(|t| t.id != id),
        }
        Rc::new(next)
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub add_toast: Callback<(String, ToastKind)>,
}

impl ToastContext {
    pub fn show_warning(&self, message: String) {
        self.add_toast.emit((message, ToastKind::Warning));
    }

    pub fn show_error(&self, message: String) {
        self.add_toast.emit((message, ToastKind::Error));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0usize);

    let add_toast = {
        let list = list.clone();
        use_callback((), move |(message, kind): (String, ToastKind), _| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                *next_id += 1;
                *next_id
            };
            list.dispatch(ToastAction::Add(Toast { id, message, kind }));

            let list = list.clone();
            gloo_timers::callback::Timeout::new(settings::get_settings().toast_duration_ms, move || {
                list.dispatch(ToastAction::Remove(id));
            })
            .forget();
        })
    };

    let context = ToastContext { add_toast };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for list.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let list = list.clone();
                        Callback::from(move |_| list.dispatch(ToastAction::Remove(id)))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.kind.alert_class(), "shadow-lg")}>
                            <i class={toast.kind.icon()}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
