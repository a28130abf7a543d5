use resume_page::ResumePage;

fn main() {
    yew::Renderer::<ResumePage>::new().render();
}
