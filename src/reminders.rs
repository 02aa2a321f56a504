mod api_ext;
