//! Sign-in and sign-up pages. The navbar hides itself on both.

use dioxus::prelude::*;

#[component]
pub fn Login() -> Element {
    rsx! {
        section { class: "page page-login",
            h1 { "Masuk" }
            p { "Silakan masuk untuk mengelola publikasi." }
        }
    }
}

#[component]
pub fn Register() -> Element {
    rsx! {
        section { class: "page page-register",
            h1 { "Daftar Akun" }
            p { "Hubungi administrator untuk membuat akun baru." }
        }
    }
}
