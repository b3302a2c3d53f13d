fn main() {
    labour_dashboard_frontend::run();
}
