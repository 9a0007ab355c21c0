fn main() {
    botdash_adapter_web::run();
}
