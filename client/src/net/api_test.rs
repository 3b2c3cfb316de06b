use super::*;

#[test]
fn status_failed_message_formats_status() {
    assert_eq!(status_failed_message(500), "Server returned status 500");
}

#[test]
fn decode_failed_message_names_path() {
    let Err(err) = wire::decode_areas("{") else {
        panic!("truncated body must not decode");
    };
    let message = decode_failed_message("/api/areas", &err);
    assert!(message.starts_with("unexpected response from /api/areas: "));
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_build_has_no_transport() {
    let result = block_on(get_text(&Endpoint::areas()));
    assert_eq!(result, Err("not available outside the browser".to_owned()));
}

#[cfg(not(feature = "csr"))]
/// Poll a future that never pends to completion.
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
